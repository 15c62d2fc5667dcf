//! Actions representing side effects executed outside the state machine.
//!
//! The event handler never performs I/O. It returns a `Vec<Action>` and the
//! [`Store`](crate::app::Store) or host runtime carries them out: issuing HTTP
//! requests, cancelling them, routing, or asking the auth collaborator to show
//! its login prompt.
//!
//! # Example
//!
//! ```rust
//! use canplayit::app::Action;
//!
//! let actions = vec![Action::Navigate { path: "/pieces/42".to_string() }];
//! assert_eq!(actions.len(), 1);
//! ```

use super::modes::LoginOptions;
use crate::source::FetchRequest;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Issue an HTTP request and report back with `PiecesLoaded` or `LoadFailed`.
    Fetch(FetchRequest),

    /// Abort the in-flight piece fetch (component unmounted).
    CancelFetch,

    /// Route to another page, e.g. `/pieces/{id}`.
    Navigate {
        /// Target path.
        path: String,
    },

    /// Ask the auth collaborator to show its login prompt.
    ///
    /// Consumed by the store, which forwards it to the injected
    /// [`AuthSession`](crate::app::AuthSession).
    RequireLogin(LoginOptions),
}
