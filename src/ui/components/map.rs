//! Map view renderer.
//!
//! The terminal has no chart surface, so the map is a legend: one marker per
//! piece in API order, drawn in its difficulty color, followed by the card
//! for the selected piece.

use crate::app::selection::MarkerState;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{MapBody, SelectedCard};

pub fn render_map(out: &mut String, map: &MapBody, theme: &Theme) {
    for marker in &map.markers {
        let glyph = match marker.state {
            MarkerState::Default => "●",
            MarkerState::Hovered => "◉",
            MarkerState::Selected => "◆",
        };

        out.push_str(&Theme::fg_color(marker.color));
        out.push(' ');
        out.push_str(glyph);
        out.push(' ');
        if marker.state == MarkerState::Default {
            out.push_str(&Theme::fg(&theme.colors.text_normal));
        } else {
            out.push_str(Theme::bold());
        }
        out.push_str(&marker.title);
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&format!("  #{}", marker.id));
        out.push_str(Theme::reset());
        out.push('\n');
    }

    render_card(out, &map.card, theme);
}

/// Renders the selected-piece card; the placeholder card is dimmed.
fn render_card(out: &mut String, card: &SelectedCard, theme: &Theme) {
    out.push('\n');
    if card.has_selection {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    } else {
        out.push_str(Theme::dim());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    }
    out.push_str(&format!(" {}\n", card.title));
    out.push_str(Theme::reset());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&format!(" {}", card.author));
    if card.has_selection {
        out.push_str("  (open to view details)");
    }
    out.push_str(Theme::reset());
    out.push('\n');
}
