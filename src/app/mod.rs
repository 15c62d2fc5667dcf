//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the rendering host and the pure catalog
//! operations. It implements the event-driven loop behind the explorer page.
//!
//! # Architecture
//!
//! ```text
//! Host Input → Events → Store → handle_event → New Snapshot → Subscribers
//!                 ↑                     ↓
//!                 └──── Actions (fetch results, login results) ─┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`auth`]: Injected auth session capability
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Display mode, load status and login gate types
//! - [`selection`]: Per-view selection and hover
//! - [`state`]: State container and view model computation
//! - [`store`]: Snapshot store with change notifications
//!
//! # Example
//!
//! ```rust
//! use canplayit::app::{handle_event, AppState, Event};
//! use canplayit::{Config, Theme};
//!
//! let mut state = AppState::new(&Config::default(), Theme::default());
//! let (_render, _actions) = handle_event(&mut state, &Event::NextPage)?;
//! # Ok::<(), canplayit::CatalogError>(())
//! ```

pub mod actions;
pub mod auth;
pub mod handler;
pub mod modes;
pub mod selection;
pub mod state;
pub mod store;

pub use actions::Action;
pub use auth::{AnonymousSession, AuthSession, StaticSession};
pub use handler::{handle_event, Event};
pub use modes::{DisplayMode, LoadStatus, LoginGate, LoginOptions};
pub use selection::{MarkerState, ViewSelection};
pub use state::AppState;
pub use store::Store;
