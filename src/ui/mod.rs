//! User interface rendering layer.
//!
//! Transforms view models into ANSI-styled text through composable rendering
//! components.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, centering)
//! - [`theme`]: Color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    BodyView, DisplayItem, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, ListBody, MapBody,
    MarkerItem, PagerInfo, SearchBarInfo, SelectedCard, SuggestionItem, UIViewModel,
};
