//! Structured filter criteria and their application to a piece collection.
//!
//! The filter form collects free-text constraints and publishes them as one
//! [`FilterCriteria`] record. Applying the criteria is a separate, explicit
//! step ([`apply_filter`]); whether the explorer applies them to the visible
//! collection is a configuration choice.

use crate::domain::{CatalogError, Piece, Result};
use serde::{Deserialize, Serialize};

/// Submitted filter constraints. An empty field imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub author: String,
    pub epoch: String,
    pub difficulty: String,
    pub signature_key: String,
}

/// Which input of the filter form an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Author,
    Epoch,
    Difficulty,
    SignatureKey,
}

impl FilterField {
    /// Parses a form input name as labelled on the page (`year` for the
    /// epoch input, `key` for the signature key).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "author" => Some(Self::Author),
            "year" | "epoch" | "period" => Some(Self::Epoch),
            "difficulty" => Some(Self::Difficulty),
            "key" | "signature_key" => Some(Self::SignatureKey),
            _ => None,
        }
    }
}

impl FilterCriteria {
    /// True when no field constrains anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.author, &self.epoch, &self.difficulty, &self.signature_key]
            .iter()
            .all(|field| field.trim().is_empty())
    }

    #[must_use]
    pub fn field(&self, field: FilterField) -> &str {
        match field {
            FilterField::Author => &self.author,
            FilterField::Epoch => &self.epoch,
            FilterField::Difficulty => &self.difficulty,
            FilterField::SignatureKey => &self.signature_key,
        }
    }

    pub fn set_field(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Author => self.author = value,
            FilterField::Epoch => self.epoch = value,
            FilterField::Difficulty => self.difficulty = value,
            FilterField::SignatureKey => self.signature_key = value,
        }
    }
}

/// Parsed difficulty constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DifficultyBound {
    /// The piece's range must contain this value.
    Exactly(f64),
    /// The piece's range must overlap `[lo, hi]`.
    Between(f64, f64),
}

impl DifficultyBound {
    /// Parses `"0.4"` or `"0.2-0.6"`. Values must lie in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidFilter`] for non-numeric input,
    /// out-of-domain values or an inverted range.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let bound = match text.split_once('-') {
            Some((lo, hi)) => {
                let lo = parse_unit(lo)?;
                let hi = parse_unit(hi)?;
                if lo > hi {
                    return Err(CatalogError::InvalidFilter(format!(
                        "difficulty range {lo}-{hi} is inverted"
                    )));
                }
                Self::Between(lo, hi)
            }
            None => Self::Exactly(parse_unit(text)?),
        };
        Ok(bound)
    }

    fn admits(self, piece: &Piece) -> bool {
        let Some(difficulty) = piece.difficulty else {
            return false;
        };
        let (x1, x2) = difficulty.bounds();
        match self {
            Self::Exactly(d) => x1 <= d && d <= x2,
            Self::Between(lo, hi) => x1 <= hi && lo <= x2,
        }
    }
}

fn parse_unit(text: &str) -> Result<f64> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| CatalogError::InvalidFilter(format!("difficulty '{}' is not a number", text.trim())))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(CatalogError::InvalidFilter(format!(
            "difficulty {value} is outside [0, 1]"
        )));
    }
    Ok(value)
}

/// Returns the pieces satisfying every non-empty constraint, in input order.
///
/// - `author`: case-insensitive substring
/// - `epoch`: case-insensitive equality with the piece period
/// - `signature_key`: case-insensitive equality with the piece key
/// - `difficulty`: see [`DifficultyBound::parse`]
///
/// # Errors
///
/// Returns [`CatalogError::InvalidFilter`] when the difficulty constraint
/// cannot be parsed.
///
/// # Examples
///
/// ```
/// use canplayit::catalog::{apply_filter, FilterCriteria};
/// use canplayit::{Difficulty, Piece};
///
/// let pieces = vec![
///     Piece::new(1, "Prelude", "J. S. Bach", "baroque", Difficulty::new(0.1, 0.3)),
///     Piece::new(2, "Etude", "Chopin", "romantic", Difficulty::new(0.6, 0.9)),
/// ];
/// let criteria = FilterCriteria { author: "bach".into(), ..Default::default() };
/// let filtered = apply_filter(&criteria, &pieces)?;
/// assert_eq!(filtered.len(), 1);
/// # Ok::<(), canplayit::CatalogError>(())
/// ```
pub fn apply_filter(criteria: &FilterCriteria, pieces: &[Piece]) -> Result<Vec<Piece>> {
    let _span = tracing::debug_span!("apply_filter", total = pieces.len(), criteria = ?criteria).entered();

    if criteria.is_empty() {
        return Ok(pieces.to_vec());
    }

    let author = criteria.author.trim().to_lowercase();
    let epoch = criteria.epoch.trim().to_lowercase();
    let key = criteria.signature_key.trim().to_lowercase();
    let difficulty = if criteria.difficulty.trim().is_empty() {
        None
    } else {
        Some(DifficultyBound::parse(&criteria.difficulty)?)
    };

    let filtered: Vec<Piece> = pieces
        .iter()
        .filter(|piece| author.is_empty() || piece.author.to_lowercase().contains(&author))
        .filter(|piece| epoch.is_empty() || piece.period.to_lowercase() == epoch)
        .filter(|piece| {
            key.is_empty()
                || piece
                    .key
                    .as_ref()
                    .is_some_and(|k| k.to_lowercase() == key)
        })
        .filter(|piece| difficulty.map_or(true, |bound| bound.admits(piece)))
        .cloned()
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "filter applied");
    Ok(filtered)
}
