//! Search bar and filter bar renderers.
//!
//! The search bar is a bordered input box followed by the last submitted
//! result and live fuzzy suggestions. The filter bar is a single summary line.

use crate::ui::helpers::{self, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FilterBarInfo, SearchBarInfo};

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box, its result line and suggestions.
///
/// ```text
/// [margin] ┌─────────────────┐ [margin]
/// [margin] │ Search: prel    │ [margin]
/// [margin] └─────────────────┘ [margin]
/// [margin]   Prelude by Bach (baroque)
/// [margin]   > Prelude
/// ```
pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, theme: &Theme, cols: usize) {
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    out.push_str(&margin);
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());
    out.push('\n');

    let search_text = format!(" Search: {}", search.query);
    let padding = inner_width.saturating_sub(visual_len(&search_text));

    out.push_str(&margin);
    out.push_str(&border);
    out.push('│');
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&search_text);
    out.push_str(&" ".repeat(padding));
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(&margin);
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());
    out.push('\n');

    if let Some(result) = &search.result {
        out.push_str(&margin);
        out.push_str("  ");
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(result);
        out.push_str(Theme::reset());
        out.push('\n');
    }

    for suggestion in &search.suggestions {
        out.push_str(&margin);
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str("  > ");
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        helpers::render_highlighted_text(out, &suggestion.title, &suggestion.highlight_ranges, theme);
        out.push_str(Theme::reset());
        out.push('\n');
    }
}

/// Renders the filter summary, marking applied criteria and rejected input.
pub fn render_filter_bar(out: &mut String, filter: &FilterBarInfo, theme: &Theme) {
    let margin = " ".repeat(SEARCH_BOX_MARGIN);

    out.push_str(&margin);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str("Filter: ");
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&filter.summary);
    if filter.applied {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(" (applied)");
    }
    if let Some(error) = &filter.error {
        out.push_str(&Theme::fg(&theme.colors.error_fg));
        out.push_str("  ");
        out.push_str(error);
    }
    out.push_str(Theme::reset());
    out.push('\n');
}
