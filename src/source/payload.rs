//! Decoding of the pieces API response envelopes.
//!
//! The collection route answers `{ "_links": {}, "array": [Piece, ...] }` and
//! the detail route answers `{ "data": Piece }`. Unknown fields are ignored.

use crate::domain::{CatalogError, Piece, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CollectionEnvelope {
    array: Vec<Piece>,
}

#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    data: Piece,
}

/// Decodes a collection response body.
///
/// # Errors
///
/// Returns [`CatalogError::Payload`] when the body is not a collection envelope
/// or a record lacks `id` or `title`.
///
/// # Example
///
/// ```rust
/// use canplayit::source::parse_pieces_payload;
///
/// let pieces = parse_pieces_payload(r#"{"_links": {}, "array": [
///     {"id": 1, "title": "Prelude", "author": "Bach", "period": "baroque",
///      "difficulty": {"x1": 0.1, "x2": 0.2}}
/// ]}"#)?;
/// assert_eq!(pieces[0].title, "Prelude");
/// # Ok::<(), canplayit::CatalogError>(())
/// ```
pub fn parse_pieces_payload(body: &str) -> Result<Vec<Piece>> {
    let envelope: CollectionEnvelope = serde_json::from_str(body)
        .map_err(|e| CatalogError::Payload(format!("failed to parse pieces collection: {e}")))?;

    tracing::debug!(count = envelope.array.len(), "decoded pieces collection");
    Ok(envelope.array)
}

/// Decodes a single-piece detail response body.
///
/// # Errors
///
/// Returns [`CatalogError::Payload`] when the body is not a detail envelope.
pub fn parse_piece_payload(body: &str) -> Result<Piece> {
    let envelope: DetailEnvelope = serde_json::from_str(body)
        .map_err(|e| CatalogError::Payload(format!("failed to parse piece detail: {e}")))?;
    Ok(envelope.data)
}
