//! Pure catalog operations: title search, structured filtering, pagination
//! and difficulty color mapping.
//!
//! Nothing in this module holds state between calls; the application layer
//! owns the query buffers, submitted criteria, current page and selections,
//! and calls into these functions to derive what is displayed.
//!
//! # Modules
//!
//! - [`search`]: exact title search, id lookup, fuzzy suggestions
//! - [`filter`]: filter criteria and the explicit apply hook
//! - [`pagination`]: page slicing, page counts and clamping
//! - [`color`]: difficulty-to-color mapping for markers

pub mod color;
pub mod filter;
pub mod pagination;
pub mod search;

pub use color::{color_for, grayscale, map_range, Color, HIGHLIGHT_COLOR};
pub use filter::{apply_filter, DifficultyBound, FilterCriteria, FilterField};
pub use pagination::{paginate, total_pages, Page, PaginationState, DEFAULT_ITEMS_PER_PAGE};
pub use search::{find_by_id, search_by_title, suggest, SearchOutcome, Suggestion};
