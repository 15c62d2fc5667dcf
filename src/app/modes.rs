//! Display mode, load status and login gate state types.
//!
//! # State Machine
//!
//! The explorer shows one of two sub-views:
//! - **List**: paginated table of pieces (default)
//! - **Map**: colored marker view handed to the graph renderer
//!
//! Entering map mode without a credential arms the login gate. After the
//! configured delay the gate prompts once; the user either logs in or skips.
//!
//! ```text
//! Idle ──enter map──▶ Armed ──delay elapsed──▶ Prompted ──▶ LoggedIn
//!   ▲                   │                          │
//!   └────leave map──────┘                          └──────▶ Skipped
//! ```

/// Which sub-view renders the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Paginated list of pieces.
    #[default]
    List,
    /// Graph visualization with difficulty-colored markers.
    Map,
}

impl DisplayMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::List => Self::Map,
            Self::Map => Self::List,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Map => "Map mode",
        }
    }
}

/// Lifecycle of the one-shot piece collection fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Not mounted yet; nothing requested.
    #[default]
    Idle,
    /// Fetch issued, waiting for the host to report back.
    Loading,
    /// Collection received.
    Loaded,
    /// Fetch or payload decoding failed.
    Failed(String),
    /// Unmounted while the fetch was in flight; late results are dropped.
    Aborted,
}

impl LoadStatus {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Client-side login prompt gating map mode.
///
/// This is not access control: skipping keeps map mode fully usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginGate {
    /// No prompt pending.
    #[default]
    Idle,
    /// Map mode entered without a credential at `armed_at` (unix seconds).
    Armed { armed_at: i64 },
    /// Prompt requested from the auth collaborator.
    Prompted,
    /// The user logged in; the gate never fires again this session.
    LoggedIn,
    /// The user skipped; the gate never fires again this session.
    Skipped,
}

/// Options handed to the auth collaborator when the gate fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginOptions {
    pub allow_skip: bool,
    pub skip_timeout_secs: u64,
}
