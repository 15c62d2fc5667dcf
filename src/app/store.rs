//! Explicit state store publishing immutable snapshots.
//!
//! [`Store::dispatch`] runs [`handle_event`] on a copy of the current state,
//! swaps in the result as a new `Arc<AppState>` snapshot, and notifies
//! subscribers when the transition asked for a re-render. Earlier snapshots
//! held by renderers stay valid and unchanged.
//!
//! The store also owns the injected [`AuthSession`]: it mirrors whether a
//! credential exists into the state before each transition, forwards
//! `RequireLogin` actions to the session, and attaches the bearer credential
//! to outgoing requests.
//!
//! # Example
//!
//! ```rust
//! use canplayit::app::{AnonymousSession, Event, Store};
//! use canplayit::{Config, Theme};
//!
//! let mut store = Store::new(&Config::default(), Theme::default(), AnonymousSession);
//! store.subscribe(|state| println!("{} pieces", state.visible_pieces.len()));
//! let actions = store.dispatch(&Event::Mounted)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), canplayit::CatalogError>(())
//! ```

use super::auth::AuthSession;
use super::handler::{handle_event, Event};
use super::{Action, AppState};
use crate::domain::error::Result;
use crate::ui::theme::Theme;
use crate::Config;
use std::sync::Arc;

type Subscriber = Box<dyn FnMut(&AppState)>;

/// Holds the current state snapshot, the auth capability and subscribers.
pub struct Store<A: AuthSession> {
    state: Arc<AppState>,
    auth: A,
    subscribers: Vec<Subscriber>,
}

impl<A: AuthSession> Store<A> {
    #[must_use]
    pub fn new(config: &Config, theme: Theme, auth: A) -> Self {
        let mut state = AppState::new(config, theme);
        state.authenticated = auth.credential().is_some();
        Self {
            state: Arc::new(state),
            auth,
            subscribers: Vec::new(),
        }
    }

    /// Current immutable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn auth(&self) -> &A {
        &self.auth
    }

    /// Mutable access to the session, e.g. to store a fresh credential before
    /// dispatching `LoginCompleted`.
    pub fn auth_mut(&mut self) -> &mut A {
        &mut self.auth
    }

    /// Registers a callback invoked with each snapshot that needs rendering.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Applies `event` and returns the actions left for the host.
    ///
    /// `RequireLogin` is consumed here; `Fetch` requests get the bearer header
    /// when the session holds a credential.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`]; the previous snapshot is kept.
    pub fn dispatch(&mut self, event: &Event) -> Result<Vec<Action>> {
        let mut next = AppState::clone(&self.state);
        next.authenticated = self.auth.credential().is_some();

        let (needs_render, actions) = handle_event(&mut next, event)?;
        self.state = Arc::new(next);

        let mut remaining = Vec::with_capacity(actions.len());
        for action in actions {
            match action {
                Action::RequireLogin(options) => self.auth.require_login(options),
                Action::Fetch(request) => {
                    let request = match self.auth.credential() {
                        Some(credential) => request.with_bearer(credential),
                        None => request,
                    };
                    remaining.push(Action::Fetch(request));
                }
                other => remaining.push(other),
            }
        }

        if needs_render {
            tracing::trace!(subscribers = self.subscribers.len(), "notifying subscribers");
            for subscriber in &mut self.subscribers {
                subscriber(&self.state);
            }
        }

        Ok(remaining)
    }
}

impl<A: AuthSession + std::fmt::Debug> std::fmt::Debug for Store<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("auth", &self.auth)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
