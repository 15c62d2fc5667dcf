//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! The result is a single ANSI-styled string; the host decides where it goes.
//!
//! # Example
//!
//! ```rust
//! use canplayit::app::AppState;
//! use canplayit::ui::render;
//! use canplayit::{Config, Theme};
//!
//! let state = AppState::new(&Config::default(), Theme::default());
//! let frame = render(&state, 24, 80);
//! assert!(frame.contains("No pieces loaded"));
//! ```

use crate::app::modes::LoadStatus;
use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::push_border;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

/// Renders one frame of the explorer page for a `rows` x `cols` terminal.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let is_error = matches!(state.load_status, LoadStatus::Failed(_));

    let mut out = String::new();
    render_viewmodel(&mut out, &viewmodel, &state.theme, is_error, cols);
    out
}

/// Lays out the view model: chrome, then the empty state or the active body.
fn render_viewmodel(out: &mut String, vm: &UIViewModel, theme: &Theme, is_error: bool, cols: usize) {
    components::render_header(out, &vm.header, theme, cols);
    push_border(out, &theme.colors.border, cols);
    components::render_search_bar(out, &vm.search_bar, theme, cols);
    components::render_filter_bar(out, &vm.filter_bar, theme);
    push_border(out, &theme.colors.border, cols);

    if let Some(empty) = &vm.empty_state {
        components::render_empty_state(out, empty, is_error, theme, cols);
    } else {
        match &vm.body {
            BodyView::List(list) => components::render_list(out, list, theme, cols),
            BodyView::Map(map) => components::render_map(out, map, theme),
        }
    }

    push_border(out, &theme.colors.border, cols);
    components::render_footer(out, &vm.footer, theme, cols);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::DisplayMode;
    use crate::domain::{Difficulty, Piece, PieceId};
    use crate::Config;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(&Config::default(), Theme::default());
        state.set_pieces(
            (0..10)
                .map(|i| Piece::new(i, format!("Piece {i}"), "Composer", "romantic", Difficulty::new(0.5, 0.5)))
                .collect(),
        );
        state
    }

    #[test]
    fn list_frame_shows_page_and_pager() {
        let frame = render(&loaded_state(), 30, 100);
        assert!(frame.contains("Piece 0"));
        assert!(frame.contains("Piece 6"));
        assert!(!frame.contains("Piece 7"));
        assert!(frame.contains("[1]"));
        assert!(frame.contains(" 2 "));
    }

    #[test]
    fn map_frame_shows_card() {
        let mut state = loaded_state();
        state.display_mode = DisplayMode::Map;
        state.map_selection.select(PieceId::from(3));
        let frame = render(&state, 30, 100);
        assert!(frame.contains("[Map mode]"));
        assert!(frame.contains("open to view details"));
    }

    #[test]
    fn failed_load_frame_shows_reason() {
        let mut state = AppState::new(&Config::default(), Theme::default());
        state.load_status = LoadStatus::Failed("connection refused".to_string());
        let frame = render(&state, 24, 80);
        assert!(frame.contains("Could not load pieces"));
        assert!(frame.contains("connection refused"));
    }
}
