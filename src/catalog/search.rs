//! Title search and live suggestions.
//!
//! Submitted searches are exact, case-sensitive title matches: the first piece
//! whose title equals the query wins. Suggestions are a separate, typing-time
//! aid built on the Skim fuzzy matcher and never change what a submit returns.

use crate::domain::{Piece, PieceId, PieceSummary};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Result of the most recent title search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchOutcome {
    /// No search has been submitted yet.
    #[default]
    NotSearched,
    /// A search ran and no title matched.
    NoMatch,
    /// The first piece with a matching title.
    Found(PieceSummary),
}

impl SearchOutcome {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Searches `pieces` for an exact title match.
///
/// Returns `None` for an empty query, meaning no search was performed; callers
/// keep their previous outcome in that case.
///
/// # Examples
///
/// ```
/// use canplayit::catalog::{search_by_title, SearchOutcome};
/// use canplayit::{Difficulty, Piece};
///
/// let pieces = vec![Piece::new(1, "Prelude", "Bach", "baroque", Difficulty::new(0.1, 0.2))];
/// assert!(matches!(search_by_title("Prelude", &pieces), Some(SearchOutcome::Found(_))));
/// assert_eq!(search_by_title("prelude", &pieces), Some(SearchOutcome::NoMatch));
/// assert_eq!(search_by_title("", &pieces), None);
/// ```
#[must_use]
pub fn search_by_title(query: &str, pieces: &[Piece]) -> Option<SearchOutcome> {
    if query.is_empty() {
        tracing::debug!("empty query, search skipped");
        return None;
    }

    let outcome = pieces
        .iter()
        .find(|piece| piece.title == query)
        .map_or(SearchOutcome::NoMatch, |piece| SearchOutcome::Found(piece.summary()));

    tracing::debug!(
        query = %query,
        searched = pieces.len(),
        found = outcome.is_found(),
        "title search completed"
    );

    Some(outcome)
}

/// Looks a piece up by its unique id.
#[must_use]
pub fn find_by_id<'a>(id: &PieceId, pieces: &'a [Piece]) -> Option<&'a Piece> {
    pieces.iter().find(|piece| &piece.id == id)
}

/// A fuzzy title suggestion shown while the user types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub id: PieceId,
    pub title: String,
    pub score: i64,
    /// Matched character ranges `(start, end)`, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Ranks titles against the buffered query, best first.
///
/// Ties keep catalog order. An empty or whitespace-only query yields nothing.
#[must_use]
pub fn suggest(query: &str, pieces: &[Piece], limit: usize) -> Vec<Suggestion> {
    let query = query.trim();
    if query.is_empty() || limit == 0 {
        return vec![];
    }

    let _span = tracing::debug_span!("suggest", query_len = query.len(), total = pieces.len()).entered();

    let matcher = SkimMatcherV2::default();
    let mut suggestions: Vec<Suggestion> = pieces
        .iter()
        .filter_map(|piece| {
            matcher
                .fuzzy_indices(&piece.title, query)
                .map(|(score, indices)| Suggestion {
                    id: piece.id.clone(),
                    title: piece.title.clone(),
                    score,
                    highlight_ranges: coalesce_indices(&indices),
                })
        })
        .collect();

    suggestions.sort_by(|a, b| b.score.cmp(&a.score));
    suggestions.truncate(limit);

    tracing::debug!(count = suggestions.len(), "suggestions computed");
    suggestions
}

/// Collapses sorted match indices into contiguous `(start, end)` ranges.
fn coalesce_indices(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;

    fn catalog() -> Vec<Piece> {
        vec![
            Piece::new(1, "Etude No.1", "Chopin", "romantic", Difficulty::new(0.6, 0.8)),
            Piece::new(2, "Prelude", "Bach", "baroque", Difficulty::new(0.1, 0.3)),
        ]
    }

    #[test]
    fn exact_match_returns_summary() {
        let outcome = search_by_title("Prelude", &catalog());
        assert_eq!(
            outcome,
            Some(SearchOutcome::Found(PieceSummary {
                title: "Prelude".to_string(),
                author: "Bach".to_string(),
                period: "baroque".to_string(),
            }))
        );
    }

    #[test]
    fn missing_title_is_no_match() {
        assert_eq!(search_by_title("Nonexistent", &catalog()), Some(SearchOutcome::NoMatch));
        assert_eq!(search_by_title("Prelude", &[]), Some(SearchOutcome::NoMatch));
    }

    #[test]
    fn match_is_case_sensitive_and_literal() {
        assert_eq!(search_by_title("prelude", &catalog()), Some(SearchOutcome::NoMatch));
        assert_eq!(search_by_title("Prelude ", &catalog()), Some(SearchOutcome::NoMatch));
    }

    #[test]
    fn duplicate_titles_return_first() {
        let mut pieces = catalog();
        pieces.push(Piece::new(3, "Prelude", "Debussy", "impressionist", Difficulty::new(0.5, 0.7)));

        let Some(SearchOutcome::Found(summary)) = search_by_title("Prelude", &pieces) else {
            panic!("expected a match");
        };
        assert_eq!(summary.author, "Bach");
    }

    #[test]
    fn empty_query_is_not_a_search() {
        let mut pieces = catalog();
        pieces.push(Piece::new(9, "", "Anonymous", "", Difficulty::new(0.0, 0.0)));
        assert_eq!(search_by_title("", &pieces), None);
    }

    #[test]
    fn find_by_id_uses_unique_key() {
        let pieces = catalog();
        assert_eq!(find_by_id(&PieceId::new("2"), &pieces).map(|p| p.title.as_str()), Some("Prelude"));
        assert!(find_by_id(&PieceId::new("99"), &pieces).is_none());
    }

    #[test]
    fn suggestions_rank_and_highlight() {
        let suggestions = suggest("prel", &catalog(), 5);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].title, "Prelude");
        assert_eq!(suggestions[0].highlight_ranges, vec![(0, 4)]);

        assert!(suggest("   ", &catalog(), 5).is_empty());
        assert!(suggest("prel", &catalog(), 0).is_empty());
    }

    #[test]
    fn coalesce_splits_on_gaps() {
        assert_eq!(coalesce_indices(&[0, 1, 3, 4, 7]), vec![(0, 2), (3, 5), (7, 8)]);
        assert!(coalesce_indices(&[]).is_empty());
    }
}
