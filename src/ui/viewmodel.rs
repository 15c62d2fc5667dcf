//! View model types representing renderable UI state.
//!
//! View models are computed from application state via
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data: truncated text, difficulty
//! colors, highlight ranges and pager numbers.
//!
//! # Example
//!
//! ```rust
//! use canplayit::app::DisplayMode;
//! use canplayit::ui::viewmodel::{HeaderInfo, PagerInfo};
//!
//! let header = HeaderInfo { title: " Can I Play It? ".to_string(), mode: DisplayMode::List };
//! let pager = PagerInfo { current_page: 1, total_pages: 3 };
//! assert_eq!(pager.page_numbers().count(), 3);
//! # let _ = header;
//! ```

use crate::app::modes::DisplayMode;
use crate::app::selection::MarkerState;
use crate::catalog::Color;
use crate::domain::PieceId;

/// Complete UI view model for rendering one frame of the explorer page.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    pub search_bar: SearchBarInfo,

    pub filter_bar: FilterBarInfo,

    /// List table or map markers, depending on the display mode.
    pub body: BodyView,

    /// Shown instead of the body while nothing can be listed.
    pub empty_state: Option<EmptyState>,

    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, including the visible piece count.
    pub title: String,

    /// Display mode shown as a badge next to the title.
    pub mode: DisplayMode,
}

/// Search input, the last submitted result and live suggestions.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Buffered query text.
    pub query: String,

    /// Result line of the last submitted search, if one was submitted.
    pub result: Option<String>,

    pub suggestions: Vec<SuggestionItem>,
}

/// One fuzzy title suggestion.
#[derive(Debug, Clone)]
pub struct SuggestionItem {
    pub title: String,

    /// Character ranges to highlight, as `(start, end)` char indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Filter form summary.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    /// Non-empty form fields as `name=value` pairs, or "no filters".
    pub summary: String,

    /// Whether submitted criteria currently restrict the visible pieces.
    pub applied: bool,

    /// Why the submitted criteria were rejected.
    pub error: Option<String>,
}

/// Body of the page.
#[derive(Debug, Clone)]
pub enum BodyView {
    List(ListBody),
    Map(MapBody),
}

/// One page of the list view plus its pager.
#[derive(Debug, Clone)]
pub struct ListBody {
    pub items: Vec<DisplayItem>,
    pub pager: PagerInfo,
}

/// Display information for a single list row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub id: PieceId,

    /// Title, truncated to the title column.
    pub title: String,

    pub author: String,

    pub period: String,

    /// Difficulty shade (or the highlight color when selected).
    pub swatch: Color,

    pub is_selected: bool,
}

/// Page buttons under the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerInfo {
    /// 1-indexed current page.
    pub current_page: usize,

    /// Number of page buttons; 0 for an empty collection.
    pub total_pages: usize,
}

impl PagerInfo {
    /// Page button labels, `1..=total_pages`.
    pub fn page_numbers(&self) -> impl Iterator<Item = usize> {
        1..=self.total_pages
    }
}

/// Markers of the map view plus the selected-piece card.
#[derive(Debug, Clone)]
pub struct MapBody {
    pub markers: Vec<MarkerItem>,
    pub card: SelectedCard,
}

/// One map marker.
#[derive(Debug, Clone)]
pub struct MarkerItem {
    pub id: PieceId,
    pub title: String,
    pub color: Color,
    pub state: MarkerState,
}

/// Card describing the map's selected piece.
#[derive(Debug, Clone)]
pub struct SelectedCard {
    /// Selected title, or a placeholder.
    pub title: String,

    /// Selected author, or a placeholder.
    pub author: String,

    /// Whether the card can be opened.
    pub has_selection: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No pieces").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Command help text.
    pub keybindings: String,
}
