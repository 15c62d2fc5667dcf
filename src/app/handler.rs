//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input, fetch
//! results, timer ticks and login results, translating them into state changes
//! and action sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the host (DOM-like input, HTTP results, timers)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` fields and methods
//! 4. Actions are collected and returned for execution
//!
//! The boolean in the returned tuple tells the caller whether the visible
//! state changed and a re-render is needed.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mounted`, `PiecesLoaded`, `LoadFailed`, `Unmounted`
//! - **Search**: `EditQuery`, `SubmitSearch`
//! - **Filter**: `EditFilter`, `SubmitFilter`, `ClearFilter`
//! - **Pagination**: `SelectPage`, `NextPage`, `PreviousPage`
//! - **Selection**: `SelectPiece`, `HoverPiece`, `ClearSelection`, `OpenSelected`, `OpenPiece`
//! - **Map mode / login**: `ToggleMapMode`, `Tick`, `LoginCompleted`, `LoginSkipped`
//!
//! # Example
//!
//! ```rust
//! use canplayit::app::{handle_event, AppState, Event};
//! use canplayit::{Config, Theme};
//!
//! let mut state = AppState::new(&Config::default(), Theme::default());
//! let (needs_render, actions) = handle_event(&mut state, &Event::Mounted)?;
//! assert!(needs_render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), canplayit::CatalogError>(())
//! ```

use crate::app::modes::{DisplayMode, LoadStatus, LoginGate};
use crate::app::{Action, AppState};
use crate::catalog::{self, FilterCriteria, FilterField};
use crate::domain::error::Result;
use crate::domain::{Piece, PieceId};

/// Events triggered by user input, fetch results, or timers.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The page mounted; request the collection.
    Mounted,
    /// The collection request succeeded.
    PiecesLoaded(Vec<Piece>),
    /// The collection request or payload decoding failed.
    LoadFailed {
        /// Description of the failure.
        message: String,
    },
    /// The page is going away; abort in-flight work and drop selections.
    Unmounted,

    /// Replaces the buffered title query (not searched until submit).
    EditQuery(String),
    /// Runs an exact title search on the buffered query and clears the buffer.
    SubmitSearch,

    /// Replaces one field of the filter form.
    EditFilter {
        /// Form input being edited.
        field: FilterField,
        /// New contents of the input.
        value: String,
    },
    /// Publishes the filter form as the current criteria.
    SubmitFilter,
    /// Clears both the form and the submitted criteria.
    ClearFilter,

    /// Moves the list to a 1-indexed page.
    SelectPage(usize),
    NextPage,
    PreviousPage,

    /// Selects a piece in the active view.
    SelectPiece(PieceId),
    /// Sets or clears the hovered piece in the map view.
    HoverPiece(Option<PieceId>),
    /// Clears the active view's selection.
    ClearSelection,
    /// Navigates to the active view's selected piece.
    OpenSelected,
    /// Navigates straight to a piece (list click-through).
    OpenPiece(PieceId),

    /// Flips between list and map mode at unix time `at`.
    ToggleMapMode {
        /// Unix seconds, used to arm the login gate.
        at: i64,
    },
    /// Periodic timer carrying the current unix time.
    Tick {
        /// Unix seconds.
        now: i64,
    },
    /// The auth collaborator finished a login.
    LoginCompleted,
    /// The user dismissed the login prompt. Only honored while the prompt is
    /// showing and `allow_skip` is set.
    LoginSkipped,
}

impl Event {
    /// `ToggleMapMode` stamped with the current wall-clock time.
    #[must_use]
    pub fn toggle_map_mode_now() -> Self {
        Self::ToggleMapMode {
            at: chrono::Utc::now().timestamp(),
        }
    }

    /// `Tick` stamped with the current wall-clock time.
    #[must_use]
    pub fn tick_now() -> Self {
        Self::Tick {
            now: chrono::Utc::now().timestamp(),
        }
    }
}

/// Processes an event, mutates state, and returns `(needs_render, actions)`.
///
/// # Errors
///
/// Currently every transition is infallible; the `Result` leaves room for
/// transitions that validate host input.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    match event {
        Event::Mounted => {
            if state.load_status.is_loading() {
                tracing::debug!("collection already loading, mount ignored");
                return Ok((false, vec![]));
            }
            state.load_status = LoadStatus::Loading;
            let request = state.collection_request();
            tracing::debug!(url = %request.url, "requesting piece collection");
            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::PiecesLoaded(pieces) => {
            if !state.load_status.is_loading() {
                tracing::debug!(status = ?state.load_status, "late collection result dropped");
                return Ok((false, vec![]));
            }
            tracing::debug!(count = pieces.len(), "piece collection loaded");
            state.set_pieces(pieces.clone());
            Ok((true, vec![]))
        }
        Event::LoadFailed { message } => {
            if !state.load_status.is_loading() {
                return Ok((false, vec![]));
            }
            tracing::warn!(error = %message, "piece collection failed to load");
            state.load_status = LoadStatus::Failed(message.clone());
            Ok((true, vec![]))
        }
        Event::Unmounted => {
            let mut actions = vec![];
            if state.load_status.is_loading() {
                tracing::debug!("unmounted while loading, cancelling fetch");
                state.load_status = LoadStatus::Aborted;
                actions.push(Action::CancelFetch);
            }
            state.list_selection.clear();
            state.map_selection.clear();
            state.disarm_login_gate();
            Ok((false, actions))
        }

        Event::EditQuery(query) => {
            if &state.query_input == query {
                return Ok((false, vec![]));
            }
            state.query_input.clone_from(query);
            tracing::trace!(query = %state.query_input, "search query updated");
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            let Some(outcome) = catalog::search_by_title(&state.query_input, &state.pieces) else {
                return Ok((false, vec![]));
            };
            state.search_outcome = outcome;
            state.query_input.clear();
            Ok((true, vec![]))
        }

        Event::EditFilter { field, value } => {
            if state.filter_form.field(*field) == value.as_str() {
                return Ok((false, vec![]));
            }
            state.filter_form.set_field(*field, value.clone());
            Ok((true, vec![]))
        }
        Event::SubmitFilter => {
            tracing::debug!(criteria = ?state.filter_form, "filter criteria submitted");
            state.filter = state.filter_form.clone();
            state.refresh_visible();
            Ok((true, vec![]))
        }
        Event::ClearFilter => {
            if state.filter.is_empty() && state.filter_form.is_empty() {
                return Ok((false, vec![]));
            }
            state.filter_form = FilterCriteria::default();
            state.filter = FilterCriteria::default();
            state.refresh_visible();
            Ok((true, vec![]))
        }

        Event::SelectPage(page) => {
            let len = state.visible_pieces.len();
            Ok((state.pagination.select_page(*page, len), vec![]))
        }
        Event::NextPage => {
            let len = state.visible_pieces.len();
            Ok((state.pagination.next_page(len), vec![]))
        }
        Event::PreviousPage => {
            let len = state.visible_pieces.len();
            Ok((state.pagination.previous_page(len), vec![]))
        }

        Event::SelectPiece(id) => {
            let Some(piece) = catalog::find_by_id(id, &state.visible_pieces) else {
                tracing::debug!(piece_id = %id, "selection ignored, piece not visible");
                return Ok((false, vec![]));
            };
            if !state.is_selectable(piece) {
                return Ok((false, vec![]));
            }
            let changed = state.active_selection_mut().select(id.clone());
            tracing::debug!(piece_id = %id, changed, mode = ?state.display_mode, "piece selected");
            Ok((changed, vec![]))
        }
        Event::HoverPiece(id) => {
            if state.display_mode != DisplayMode::Map {
                return Ok((false, vec![]));
            }
            Ok((state.map_selection.hover(id.clone()), vec![]))
        }
        Event::ClearSelection => Ok((state.active_selection_mut().clear(), vec![])),
        Event::OpenSelected => {
            let Some(path) = state.selected_piece().map(Piece::detail_path) else {
                tracing::debug!("no piece selected");
                return Ok((false, vec![]));
            };
            state.active_selection_mut().clear();
            tracing::debug!(path = %path, "navigating to selected piece");
            Ok((true, vec![Action::Navigate { path }]))
        }
        Event::OpenPiece(id) => {
            let Some(path) = catalog::find_by_id(id, &state.visible_pieces).map(Piece::detail_path) else {
                return Ok((false, vec![]));
            };
            Ok((false, vec![Action::Navigate { path }]))
        }

        Event::ToggleMapMode { at } => {
            state.display_mode = state.display_mode.toggled();
            tracing::debug!(mode = ?state.display_mode, "display mode toggled");
            match state.display_mode {
                DisplayMode::Map => {
                    state.arm_login_gate(*at);
                }
                DisplayMode::List => {
                    state.disarm_login_gate();
                }
            }
            Ok((true, vec![]))
        }
        Event::Tick { now } => {
            if state.display_mode != DisplayMode::Map {
                return Ok((false, vec![]));
            }
            Ok(state
                .poll_login_gate(*now)
                .map_or((false, vec![]), |options| (true, vec![Action::RequireLogin(options)])))
        }
        Event::LoginCompleted => {
            state.login_gate = LoginGate::LoggedIn;
            state.authenticated = true;
            tracing::debug!("login completed");
            Ok((true, vec![]))
        }
        Event::LoginSkipped => {
            if !state.config().allow_skip || state.login_gate != LoginGate::Prompted {
                tracing::debug!(gate = ?state.login_gate, "login skip ignored");
                return Ok((false, vec![]));
            }
            state.login_gate = LoginGate::Skipped;
            tracing::debug!("login skipped");
            Ok((true, vec![]))
        }
    }
}

/// Event name without payload, so spans stay small for large collections.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::PiecesLoaded(pieces) => write!(f, "PiecesLoaded({} pieces)", pieces.len()),
            other => write!(f, "{other:?}"),
        }
    }
}
