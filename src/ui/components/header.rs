//! Header component renderer.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered title with the display mode badge.
///
/// ```text
/// [left padding] Can I Play It? (42 pieces) [List] [right padding]
/// ```
pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let text = format!("{}[{}]", header.title, header.mode.label());

    let mut style = String::from(Theme::bold());
    style.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        style.push_str(&Theme::bg(bg));
    }
    push_centered(out, &text, &style, cols);
}
