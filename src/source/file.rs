//! Piece source backed by a saved API response on disk.

use super::{parse_pieces_payload, FetchRequest, PieceSource};
use crate::domain::{Piece, Result};
use std::path::PathBuf;

/// Serves every collection request from one JSON file holding a collection
/// envelope, regardless of the requested URL.
#[derive(Debug, Clone)]
pub struct JsonFilePieceSource {
    path: PathBuf,
}

impl JsonFilePieceSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PieceSource for JsonFilePieceSource {
    fn fetch_pieces(&self, request: &FetchRequest) -> Result<Vec<Piece>> {
        let _span = tracing::debug_span!("json_file_fetch", path = ?self.path, url = %request.url).entered();

        let body = std::fs::read_to_string(&self.path)?;
        parse_pieces_payload(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CatalogError;
    use crate::source::Endpoint;
    use std::io::Write;

    #[test]
    fn reads_collection_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"array": [{{"id": 1, "title": "Air"}}]}}"#).unwrap();

        let source = JsonFilePieceSource::new(file.path());
        let pieces = source
            .fetch_pieces(&FetchRequest::pieces("http://h", Endpoint::Api))
            .unwrap();
        assert_eq!(pieces.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFilePieceSource::new(dir.path().join("absent.json"));
        assert!(matches!(
            source.fetch_pieces(&FetchRequest::pieces("http://h", Endpoint::Api)),
            Err(CatalogError::Io(_))
        ));
    }
}
