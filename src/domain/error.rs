//! Error types for the catalog explorer core.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] used throughout the crate. Errors are implemented with `thiserror`.
//! None of them is fatal: the explorer is display-only, so every failure stays
//! local to the operation that produced it.

use thiserror::Error;

/// The main error type for catalog explorer operations.
///
/// # Examples
///
/// ```
/// use canplayit::CatalogError;
///
/// fn check_page_size(size: usize) -> Result<(), CatalogError> {
///     if size == 0 {
///         return Err(CatalogError::Config("items_per_page must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(check_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A piece payload could not be decoded.
    ///
    /// Occurs when the API (or a payload file) returns JSON that does not match
    /// the `{ "array": [...] }` or `{ "data": {...} }` envelopes.
    #[error("Payload error: {0}")]
    Payload(String),

    /// Submitted filter criteria cannot be applied.
    ///
    /// Raised by `apply_filter` when the difficulty constraint is not a number
    /// or range inside `[0, 1]`.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Configuration is invalid or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The piece source failed to produce a collection.
    #[error("Piece source error: {0}")]
    Source(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
