//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the state container for one mounted
//! explorer page. It separates core data (the loaded piece collection) from
//! derived state (the visible collection after optional filtering), and keeps
//! user input buffers, pagination, per-view selection and the login gate.
//!
//! # State Components
//!
//! - **Pieces**: collection loaded once per mount, never mutated afterwards
//! - **Visible Pieces**: pieces shown by the list/map (filtered when enabled)
//! - **Search**: buffered query input and the last submitted outcome
//! - **Filter**: form buffer and the last submitted criteria
//! - **Pagination**: current page of the list view
//! - **Selections**: one [`ViewSelection`] per view instance
//! - **Display Mode / Login Gate / Load Status**
//!
//! # Example
//!
//! ```rust
//! use canplayit::app::AppState;
//! use canplayit::{Config, Difficulty, Piece, Theme};
//!
//! let mut state = AppState::new(&Config::default(), Theme::default());
//! state.set_pieces(vec![Piece::new(1, "Prelude", "Bach", "baroque", Difficulty::new(0.1, 0.2))]);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.empty_state.is_none());
//! ```

use super::modes::{DisplayMode, LoadStatus, LoginGate, LoginOptions};
use super::selection::{MarkerState, ViewSelection};
use crate::catalog::{self, FilterCriteria, PaginationState, SearchOutcome};
use crate::domain::{Piece, PieceId};
use crate::source::FetchRequest;
use crate::ui::components::{AUTHOR_WIDTH, TITLE_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, DisplayItem, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, ListBody, MapBody,
    MarkerItem, PagerInfo, SearchBarInfo, SelectedCard, SuggestionItem, UIViewModel,
};
use crate::Config;

/// Maximum number of live suggestions shown under the search bar.
const SUGGESTION_LIMIT: usize = 5;

/// Rows taken by header, search box, filter bar, borders and footer.
///
/// The search result line and suggestions come on top of this.
const CHROME_ROWS: usize = 10;

/// Extra rows taken by the selected-piece card in map mode.
const CARD_ROWS: usize = 3;

/// Columns around a marker title: glyph, padding and the `#id` suffix.
const MARKER_CHROME_COLS: usize = 16;

/// State container for one mounted explorer page.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Collection as loaded from the API, in API order.
    pub pieces: Vec<Piece>,

    /// Pieces shown by the active view.
    ///
    /// Equal to `pieces` unless `apply_filters` is enabled and criteria were
    /// submitted. Recomputed by `refresh_visible()`.
    pub visible_pieces: Vec<Piece>,

    /// Lifecycle of the collection fetch.
    pub load_status: LoadStatus,

    /// Which sub-view renders the collection.
    pub display_mode: DisplayMode,

    /// Title query typed so far; only searched on submit.
    pub query_input: String,

    /// Outcome of the last submitted title search.
    pub search_outcome: SearchOutcome,

    /// Filter form contents, edited field by field.
    pub filter_form: FilterCriteria,

    /// Last submitted filter criteria.
    pub filter: FilterCriteria,

    /// Why the submitted criteria could not be applied, if they could not.
    pub filter_error: Option<String>,

    /// List view pagination.
    pub pagination: PaginationState,

    /// Selection owned by the list view.
    pub list_selection: ViewSelection,

    /// Selection and hover owned by the map view.
    pub map_selection: ViewSelection,

    /// Client-side login prompt for map mode.
    pub login_gate: LoginGate,

    /// Whether the injected auth session currently holds a credential.
    pub authenticated: bool,

    /// Color scheme for terminal rendering.
    pub theme: Theme,

    config: Config,
}

impl AppState {
    /// Creates state for a freshly mounted page: list mode, page 1, nothing loaded.
    #[must_use]
    pub fn new(config: &Config, theme: Theme) -> Self {
        Self {
            pieces: vec![],
            visible_pieces: vec![],
            load_status: LoadStatus::Idle,
            display_mode: DisplayMode::List,
            query_input: String::new(),
            search_outcome: SearchOutcome::NotSearched,
            filter_form: FilterCriteria::default(),
            filter: FilterCriteria::default(),
            filter_error: None,
            pagination: PaginationState::new(config.items_per_page),
            list_selection: ViewSelection::default(),
            map_selection: ViewSelection::default(),
            login_gate: LoginGate::Idle,
            authenticated: false,
            theme,
            config: config.clone(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Request for the whole collection on the configured endpoint.
    #[must_use]
    pub fn collection_request(&self) -> FetchRequest {
        FetchRequest::pieces(&self.config.api_host, self.config.endpoint)
    }

    #[must_use]
    pub const fn login_options(&self) -> LoginOptions {
        LoginOptions {
            allow_skip: self.config.allow_skip,
            skip_timeout_secs: self.config.skip_timeout_secs,
        }
    }

    /// Replaces the collection and recomputes everything derived from it.
    pub fn set_pieces(&mut self, pieces: Vec<Piece>) {
        self.pieces = pieces;
        self.load_status = LoadStatus::Loaded;
        self.refresh_visible();
    }

    /// Selection of the view currently on screen.
    #[must_use]
    pub const fn active_selection(&self) -> &ViewSelection {
        match self.display_mode {
            DisplayMode::List => &self.list_selection,
            DisplayMode::Map => &self.map_selection,
        }
    }

    pub fn active_selection_mut(&mut self) -> &mut ViewSelection {
        match self.display_mode {
            DisplayMode::List => &mut self.list_selection,
            DisplayMode::Map => &mut self.map_selection,
        }
    }

    /// The selected piece of the active view, if it is still visible.
    #[must_use]
    pub fn selected_piece(&self) -> Option<&Piece> {
        self.active_selection()
            .selected()
            .and_then(|id| catalog::find_by_id(id, &self.visible_pieces))
    }

    /// Whether the map renderer may select `piece`. Every piece is selectable.
    #[must_use]
    pub const fn is_selectable(&self, _piece: &Piece) -> bool {
        true
    }

    /// Pieces on the current list page.
    #[must_use]
    pub fn current_page_items(&self) -> &[Piece] {
        self.pagination.page(&self.visible_pieces).items
    }

    /// Recomputes the visible collection from the loaded pieces and criteria.
    ///
    /// # Algorithm
    ///
    /// 1. Apply submitted criteria when `apply_filters` is enabled; a criteria
    ///    error leaves the collection unfiltered and is recorded
    /// 2. Clamp the current page to the new page count
    /// 3. Drop selections pointing at pieces that are no longer visible
    pub fn refresh_visible(&mut self) {
        let _span = tracing::debug_span!("refresh_visible",
            total_pieces = self.pieces.len(),
            apply_filters = self.config.apply_filters,
        )
        .entered();

        self.filter_error = None;
        self.visible_pieces = if self.config.apply_filters && !self.filter.is_empty() {
            match catalog::apply_filter(&self.filter, &self.pieces) {
                Ok(filtered) => filtered,
                Err(e) => {
                    tracing::debug!(error = %e, "filter rejected, showing unfiltered collection");
                    self.filter_error = Some(e.to_string());
                    self.pieces.clone()
                }
            }
        } else {
            self.pieces.clone()
        };

        self.pagination.clamp_to(self.visible_pieces.len());

        let visible = &self.visible_pieces;
        let is_visible = |id: &PieceId| visible.iter().any(|piece| &piece.id == id);
        self.list_selection.retain(is_visible);
        self.map_selection.retain(is_visible);

        tracing::debug!(
            visible_count = self.visible_pieces.len(),
            current_page = self.pagination.current_page(),
            "visible pieces refreshed"
        );
    }

    /// Arms the login gate if map mode needs a prompt. Returns `true` if armed.
    pub fn arm_login_gate(&mut self, now: i64) -> bool {
        if self.authenticated || self.login_gate != LoginGate::Idle {
            return false;
        }
        self.login_gate = LoginGate::Armed { armed_at: now };
        tracing::debug!(armed_at = now, delay = self.config.login_delay_secs, "login gate armed");
        true
    }

    /// Disarms a pending (not yet prompted) login gate.
    pub fn disarm_login_gate(&mut self) -> bool {
        if matches!(self.login_gate, LoginGate::Armed { .. }) {
            self.login_gate = LoginGate::Idle;
            tracing::debug!("login gate disarmed");
            return true;
        }
        false
    }

    /// Fires the gate once its delay elapsed. Returns the prompt options if so.
    pub fn poll_login_gate(&mut self, now: i64) -> Option<LoginOptions> {
        let LoginGate::Armed { armed_at } = self.login_gate else {
            return None;
        };
        let delay = i64::try_from(self.config.login_delay_secs).unwrap_or(i64::MAX);
        if now.saturating_sub(armed_at) < delay {
            return None;
        }
        self.login_gate = LoginGate::Prompted;
        tracing::debug!(elapsed = now - armed_at, "login gate fired");
        Some(self.login_options())
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// # Windowing
    ///
    /// The list view shows exactly one page. The map view shows a window of
    /// markers centered on the selected (or hovered) piece, adjusted near the
    /// ends so the window stays full. Rows used by the search result and
    /// suggestions are taken from the map window.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let search_bar = self.compute_search_bar();
        let search_rows = usize::from(search_bar.result.is_some()) + search_bar.suggestions.len();

        let body = match self.display_mode {
            DisplayMode::List => BodyView::List(self.compute_list_body()),
            DisplayMode::Map => BodyView::Map(self.compute_map_body(rows.saturating_sub(search_rows), cols)),
        };

        UIViewModel {
            header: self.compute_header(),
            search_bar,
            filter_bar: self.compute_filter_bar(),
            body,
            empty_state: self.compute_empty_state(),
            footer: self.compute_footer(),
        }
    }

    fn compute_list_body(&self) -> ListBody {
        let page = self.pagination.page(&self.visible_pieces);

        let items = page
            .items
            .iter()
            .map(|piece| {
                let is_selected = self.list_selection.selected() == Some(&piece.id);
                DisplayItem {
                    id: piece.id.clone(),
                    title: truncate(&piece.title, TITLE_WIDTH - 2),
                    author: truncate(&piece.author, AUTHOR_WIDTH - 2),
                    period: piece.period.clone(),
                    swatch: catalog::color_for(piece, false, is_selected),
                    is_selected,
                }
            })
            .collect();

        ListBody {
            items,
            pager: PagerInfo {
                current_page: self.pagination.current_page(),
                total_pages: page.total_pages,
            },
        }
    }

    fn compute_map_body(&self, rows: usize, cols: usize) -> MapBody {
        let max_title_width = cols.saturating_sub(MARKER_CHROME_COLS).max(8);
        let available_rows = rows.saturating_sub(CHROME_ROWS + CARD_ROWS).max(1);
        let len = self.visible_pieces.len();

        let focus = self
            .map_selection
            .selected()
            .or_else(|| self.map_selection.hovered())
            .and_then(|id| self.visible_pieces.iter().position(|piece| &piece.id == id))
            .unwrap_or(0);

        let mut visible_start = focus.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(len);
        if visible_end - visible_start < available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let markers = self.visible_pieces[visible_start..visible_end]
            .iter()
            .map(|piece| {
                let state = self.map_selection.state_of(&piece.id);
                MarkerItem {
                    id: piece.id.clone(),
                    title: truncate(&piece.title, max_title_width),
                    color: catalog::color_for(
                        piece,
                        state == MarkerState::Hovered,
                        state == MarkerState::Selected,
                    ),
                    state,
                }
            })
            .collect();

        let selected = self
            .map_selection
            .selected()
            .and_then(|id| catalog::find_by_id(id, &self.visible_pieces));

        MapBody {
            markers,
            card: SelectedCard {
                title: selected.map_or_else(|| "Select a piece".to_string(), |p| p.title.clone()),
                author: selected.map_or_else(|| "...".to_string(), |p| p.author.clone()),
                has_selection: selected.is_some(),
            },
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Can I Play It? ({} pieces) ", self.visible_pieces.len()),
            mode: self.display_mode,
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        let result = match &self.search_outcome {
            SearchOutcome::NotSearched => None,
            SearchOutcome::NoMatch => Some("No match".to_string()),
            SearchOutcome::Found(summary) => Some(format!(
                "{} by {} ({})",
                summary.title, summary.author, summary.period
            )),
        };

        let suggestions = catalog::suggest(&self.query_input, &self.pieces, SUGGESTION_LIMIT)
            .into_iter()
            .map(|s| SuggestionItem {
                title: s.title,
                highlight_ranges: s.highlight_ranges,
            })
            .collect();

        SearchBarInfo {
            query: self.query_input.clone(),
            result,
            suggestions,
        }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        let form = &self.filter_form;
        let parts: Vec<String> = [
            ("author", &form.author),
            ("year", &form.epoch),
            ("difficulty", &form.difficulty),
            ("key", &form.signature_key),
        ]
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{name}={value}"))
        .collect();

        FilterBarInfo {
            summary: if parts.is_empty() {
                "no filters".to_string()
            } else {
                parts.join("  ")
            },
            applied: self.config.apply_filters && !self.filter.is_empty() && self.filter_error.is_none(),
            error: self.filter_error.clone(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        let (message, subtitle) = match &self.load_status {
            LoadStatus::Idle => ("No pieces loaded", "The catalog has not been requested yet".to_string()),
            LoadStatus::Loading => ("Loading pieces...", "Fetching the catalog".to_string()),
            LoadStatus::Failed(reason) => ("Could not load pieces", reason.clone()),
            LoadStatus::Aborted => ("Loading cancelled", "The page was closed before the catalog arrived".to_string()),
            LoadStatus::Loaded if self.visible_pieces.is_empty() => {
                if self.pieces.is_empty() {
                    ("No pieces", "The catalog is empty".to_string())
                } else {
                    ("No pieces", "No piece matches the current filter".to_string())
                }
            }
            LoadStatus::Loaded => return None,
        };

        Some(EmptyState {
            message: message.to_string(),
            subtitle,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.display_mode {
            DisplayMode::List => {
                "search <title>  filter <field> <value>  apply  page <n>  next/prev  select <id>  open  map  quit"
            }
            DisplayMode::Map => {
                "search <title>  filter <field> <value>  apply  select <id>  hover <id>  open  login/skip  map  quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Shortens `text` to `max` characters, marking the cut with `...`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{keep}...")
}
