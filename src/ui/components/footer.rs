//! Footer component renderer.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the command help line, centered and dimmed. Text wider than the
/// terminal is truncated.
pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme, cols: usize) {
    push_centered(out, &footer.keybindings, &Theme::fg(&theme.colors.text_dim), cols);
}
