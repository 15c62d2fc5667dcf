//! Piece domain model.
//!
//! A piece is one catalog entry (a musical work) as served by the pieces API.
//! Pieces are read-only to the explorer: they are decoded once per load and
//! never mutated afterwards.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Difficulty midpoint used when a record carries no usable difficulty.
const UNKNOWN_DIFFICULTY_MIDPOINT: f64 = 0.5;

/// Opaque unique identifier of a piece.
///
/// The API sends numeric ids (`musicsheetid`) but nothing in the explorer
/// depends on that, so ids are kept as strings. Both JSON numbers and strings
/// decode into a `PieceId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PieceId(String);

impl PieceId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PieceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<i64> for PieceId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for PieceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => Self::from(n),
            RawId::Text(s) => Self(s),
        })
    }
}

/// Normalized difficulty range of a piece.
///
/// Both bounds are expected in `[0, 1]` with `x1 <= x2`. The API does not
/// enforce this, so consumers clamp instead of trusting it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    pub x1: f64,
    pub x2: f64,
}

impl Difficulty {
    #[must_use]
    pub const fn new(x1: f64, x2: f64) -> Self {
        Self { x1, x2 }
    }

    /// Mean of the range, clamped to `[0, 1]`.
    ///
    /// Non-finite bounds yield the neutral midpoint `0.5`.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        let mid = (self.x1 + self.x2) / 2.0;
        if mid.is_finite() {
            mid.clamp(0.0, 1.0)
        } else {
            UNKNOWN_DIFFICULTY_MIDPOINT
        }
    }

    /// Lower and upper bound in ascending order.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        if self.x1 <= self.x2 {
            (self.x1, self.x2)
        } else {
            (self.x2, self.x1)
        }
    }
}

/// A catalog entry served by the pieces API.
///
/// # Examples
///
/// ```
/// use canplayit::{Difficulty, Piece};
///
/// let piece = Piece::new(1, "Prelude", "Bach", "baroque", Difficulty::new(0.2, 0.4));
/// assert_eq!(piece.id.as_str(), "1");
/// assert!((piece.difficulty_midpoint() - 0.3).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, alias = "epoch")]
    pub period: String,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Signature key label, when the catalog records one.
    #[serde(default)]
    pub key: Option<String>,
}

impl Piece {
    #[must_use]
    pub fn new(
        id: impl Into<PieceId>,
        title: impl Into<String>,
        author: impl Into<String>,
        period: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            period: period.into(),
            difficulty: Some(difficulty),
            key: None,
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Difficulty midpoint in `[0, 1]`; `0.5` when the record has none.
    #[must_use]
    pub fn difficulty_midpoint(&self) -> f64 {
        self.difficulty
            .as_ref()
            .map_or(UNKNOWN_DIFFICULTY_MIDPOINT, Difficulty::midpoint)
    }

    /// Route of the piece detail page.
    #[must_use]
    pub fn detail_path(&self) -> String {
        format!("/pieces/{}", self.id)
    }

    /// Reduced record returned by title search.
    #[must_use]
    pub fn summary(&self) -> PieceSummary {
        PieceSummary {
            title: self.title.clone(),
            author: self.author.clone(),
            period: self.period.clone(),
        }
    }
}

/// The `{title, author, period}` record produced by a successful title search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSummary {
    pub title: String,
    pub author: String,
    pub period: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_decode() {
        let numeric: Piece = serde_json::from_str(
            r#"{"id": 42, "title": "Etude", "author": "Chopin", "period": "romantic",
                "difficulty": {"x1": 0.1, "x2": 0.3}, "key": "C minor"}"#,
        )
        .unwrap();
        assert_eq!(numeric.id, PieceId::new("42"));
        assert_eq!(numeric.key.as_deref(), Some("C minor"));

        let text: Piece = serde_json::from_str(r#"{"id": "abc", "title": "Etude"}"#).unwrap();
        assert_eq!(text.id.as_str(), "abc");
        assert!(text.difficulty.is_none());
        assert!(text.author.is_empty());
    }

    #[test]
    fn epoch_is_accepted_as_period() {
        let piece: Piece =
            serde_json::from_str(r#"{"id": 1, "title": "Air", "epoch": "baroque"}"#).unwrap();
        assert_eq!(piece.period, "baroque");
    }

    #[test]
    fn midpoint_is_clamped_and_defaults() {
        assert!((Difficulty::new(0.9, 1.5).midpoint() - 1.0).abs() < f64::EPSILON);
        assert!((Difficulty::new(f64::NAN, 0.2).midpoint() - 0.5).abs() < f64::EPSILON);

        let mut piece = Piece::new(1, "Air", "Bach", "baroque", Difficulty::new(0.0, 0.0));
        piece.difficulty = None;
        assert!((piece.difficulty_midpoint() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn detail_path_uses_id() {
        let piece = Piece::new(7, "Air", "Bach", "baroque", Difficulty::new(0.0, 0.1));
        assert_eq!(piece.detail_path(), "/pieces/7");
    }
}
