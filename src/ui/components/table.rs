//! List view renderer.
//!
//! Renders one page of pieces as a table with a difficulty swatch, TITLE,
//! AUTHOR and PERIOD columns, followed by the page buttons.

use crate::ui::helpers::visual_len;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ListBody, PagerInfo};

/// Width of the TITLE column, including the gap after it.
pub(crate) const TITLE_WIDTH: usize = 32;

/// Width of the AUTHOR column, including the gap after it.
pub(crate) const AUTHOR_WIDTH: usize = 24;

/// Width of the swatch column (`██ `).
const SWATCH_WIDTH: usize = 3;

/// Renders the column headers, the rows, and the pager.
pub fn render_list(out: &mut String, list: &ListBody, theme: &Theme, cols: usize) {
    render_table_headers(out, theme);
    for item in &list.items {
        render_table_row(out, item, theme, cols);
    }
    render_pager(out, list.pager, theme);
}

fn render_table_headers(out: &mut String, theme: &Theme) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&format!(
        "{:<SWATCH_WIDTH$}{:<TITLE_WIDTH$}{:<AUTHOR_WIDTH$}{}",
        "", "TITLE", "AUTHOR", "PERIOD"
    ));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders a single row.
///
/// The swatch keeps its difficulty color even on the selected row; the rest
/// of the row takes the selection colors and is padded to the full width.
fn render_table_row(out: &mut String, item: &DisplayItem, theme: &Theme, cols: usize) {
    out.push_str(&Theme::fg_color(item.swatch));
    out.push_str("██ ");

    if item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }

    let line = format!(
        "{}{}{}{}{}",
        item.title,
        " ".repeat(TITLE_WIDTH.saturating_sub(visual_len(&item.title))),
        item.author,
        " ".repeat(AUTHOR_WIDTH.saturating_sub(visual_len(&item.author))),
        item.period,
    );
    let line_len = SWATCH_WIDTH + visual_len(&line);
    out.push_str(&line);
    out.push_str(&" ".repeat(cols.saturating_sub(line_len)));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders the page buttons, `[1] 2 3`, with the current page highlighted.
/// Nothing is drawn for an empty collection.
fn render_pager(out: &mut String, pager: PagerInfo, theme: &Theme) {
    if pager.total_pages == 0 {
        return;
    }

    out.push('\n');
    out.push_str(&" ".repeat(SWATCH_WIDTH));
    for page in pager.page_numbers() {
        if page == pager.current_page {
            out.push_str(&Theme::fg(&theme.colors.pager_active_fg));
            out.push_str(&Theme::bg(&theme.colors.pager_active_bg));
            out.push_str(&format!("[{page}]"));
            out.push_str(Theme::reset());
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            out.push_str(&format!(" {page} "));
            out.push_str(Theme::reset());
        }
        out.push(' ');
    }
    out.push('\n');
}
