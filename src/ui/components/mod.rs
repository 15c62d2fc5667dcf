//! Composable UI component renderers.
//!
//! Each component appends ANSI-styled lines for one part of the page to a
//! `String` buffer.
//!
//! # Components
//!
//! - [`header`]: Title bar with piece count and mode badge
//! - [`search`]: Search input box, result line, suggestions, filter summary
//! - [`table`]: Paginated piece list with difficulty swatches and pager
//! - [`map`]: Marker legend and selected-piece card
//! - [`empty`]: Loading / failed / nothing-to-list message
//! - [`footer`]: Command help text
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Search Bar + suggestions]
//! [Filter Bar]
//! [Border]
//! [List table + pager | Map legend + card | Empty state]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod map;
mod search;
mod table;

pub use empty::render_empty_state;
pub use footer::render_footer;
pub use header::render_header;
pub use map::render_map;
pub use search::{render_filter_bar, render_search_bar};
pub use table::render_list;
pub(crate) use table::{AUTHOR_WIDTH, TITLE_WIDTH};
