//! Piece data source boundary.
//!
//! The explorer never talks HTTP itself. It describes requests
//! ([`FetchRequest`]), the host performs them, and the response bodies are
//! decoded here. [`PieceSource`] abstracts hosts that can fetch synchronously,
//! such as the file-backed source used by the terminal binary.
//!
//! # Modules
//!
//! - `request`: request descriptions, routes and the bearer header
//! - `payload`: response envelope decoding
//! - `file`: JSON file backed source

mod file;
mod payload;
mod request;

pub use file::JsonFilePieceSource;
pub use payload::{parse_piece_payload, parse_pieces_payload};
pub use request::{Endpoint, FetchRequest, Method, AUTH_HEADER};

use crate::domain::{Piece, Result};

/// Something that can turn a collection request into pieces.
pub trait PieceSource {
    /// Fetches the whole piece collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or the payload cannot be decoded.
    fn fetch_pieces(&self, request: &FetchRequest) -> Result<Vec<Piece>>;
}
