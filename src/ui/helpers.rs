//! Shared rendering utilities.
//!
//! Components write ANSI-styled lines into a `String` buffer. Widths are
//! measured in characters, not bytes, so accented titles (`Étude`) pad
//! correctly.
//!
//! # Example
//!
//! ```rust
//! use canplayit::ui::helpers::render_highlighted_text;
//! use canplayit::Theme;
//!
//! let mut out = String::new();
//! render_highlighted_text(&mut out, "Prelude", &[(0, 3)], &Theme::default());
//! assert!(out.ends_with("lude"));
//! ```

use crate::ui::theme::Theme;

/// Character count of `text`.
#[must_use]
pub fn visual_len(text: &str) -> usize {
    text.chars().count()
}

/// Appends `text` centered in `cols`, padding both sides, then a newline.
///
/// `style` is emitted before the line and reset after it.
pub fn push_centered(out: &mut String, text: &str, style: &str, cols: usize) {
    let text_len = visual_len(text).min(cols);
    let padding = cols.saturating_sub(text_len) / 2;
    let shown: String = text.chars().take(text_len).collect();

    out.push_str(style);
    out.push_str(&" ".repeat(padding));
    out.push_str(&shown);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + text_len)));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Appends a horizontal border line.
pub fn push_border(out: &mut String, color: &str, cols: usize) {
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Appends `text` with highlighted character ranges for fuzzy matches.
///
/// Ranges are `(start, end)` character indices with `end` exclusive, sorted
/// and non-overlapping. Out-of-range indices are clipped.
pub fn render_highlighted_text(out: &mut String, text: &str, ranges: &[(usize, usize)], theme: &Theme) {
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}
