//! Domain layer for the catalog explorer.
//!
//! Core types independent of any rendering host or transport.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`piece`]: Piece model, identifiers and difficulty ranges
//!
//! # Examples
//!
//! ```
//! use canplayit::domain::{Difficulty, Piece, Result};
//!
//! fn sample() -> Result<Piece> {
//!     Ok(Piece::new(1, "Prelude", "Bach", "baroque", Difficulty::new(0.1, 0.2)))
//! }
//! ```

pub mod error;
pub mod piece;

pub use error::{CatalogError, Result};
pub use piece::{Difficulty, Piece, PieceId, PieceSummary};
