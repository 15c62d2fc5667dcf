//! Empty state component renderer.
//!
//! Shown instead of the body while the catalog is loading, failed to load, or
//! has nothing to list.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Blank lines above the message.
const TOP_MARGIN: usize = 2;

/// Renders a centered two-line message.
///
/// ```text
/// [blank lines]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// Load failures use the `error_fg` color for the message so they read
/// differently from an empty catalog.
pub fn render_empty_state(out: &mut String, empty: &EmptyState, is_error: bool, theme: &Theme, cols: usize) {
    for _ in 0..TOP_MARGIN {
        out.push('\n');
    }

    let message_color = if is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.empty_state_fg
    };
    push_centered(out, &empty.message, &Theme::fg(message_color), cols);

    let mut subtitle_style = String::from(Theme::dim());
    subtitle_style.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, &empty.subtitle, &subtitle_style, cols);
}
