//! Difficulty-to-color mapping for piece markers.
//!
//! Harder pieces render darker. The difficulty midpoint is remapped from
//! `[0, 1]` onto `[0.2, 0.7]` and inverted, so resting shades span roughly
//! `#cccccc` (easiest) to `#4d4d4d` (hardest). Hovering darkens a marker by a
//! further `0.2`; selection replaces the shade with a fixed red.
//!
//! # Example
//!
//! ```rust
//! use canplayit::catalog::{color_for, HIGHLIGHT_COLOR};
//! use canplayit::{Difficulty, Piece};
//!
//! let piece = Piece::new(1, "Prelude", "Bach", "baroque", Difficulty::new(0.0, 0.0));
//! assert_eq!(color_for(&piece, false, false).to_string(), "#cccccc");
//! assert_eq!(color_for(&piece, true, true), HIGHLIGHT_COLOR);
//! ```

use crate::domain::Piece;
use std::fmt;

/// Lower end of the remapped shade range.
const SHADE_MIN: f64 = 0.2;

/// Upper end of the remapped shade range.
const SHADE_MAX: f64 = 0.7;

/// Amount a hovered marker is darkened by.
const HOVER_DARKEN: f64 = 0.2;

/// Fixed color of the selected piece (`#dc2626`).
pub const HIGHLIGHT_COLOR: Color = Color::rgb(0xdc, 0x26, 0x26);

/// A 24-bit RGB color, displayed as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Neutral gray with the same value on every channel.
    #[must_use]
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// Perceived lightness proxy; equals the channel value for grays.
    #[must_use]
    pub fn intensity(&self) -> u8 {
        let sum = u16::from(self.r) + u16::from(self.g) + u16::from(self.b);
        u8::try_from(sum / 3).unwrap_or(u8::MAX)
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Linearly remaps `value` from `[from_min, from_max]` onto `[to_min, to_max]`.
///
/// No clamping is applied; a degenerate source range maps everything to `to_min`.
#[must_use]
pub fn map_range(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    let range = from_max - from_min;
    if range == 0.0 {
        return to_min;
    }
    let scaled = (value - from_min) / range;
    scaled * (to_max - to_min) + to_min
}

/// Encodes `value` in `[0, 1]` as a neutral gray.
///
/// Input is clamped; non-finite input encodes as black.
#[must_use]
pub fn grayscale(value: f64) -> Color {
    let value = if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let level = (value * 255.0).round() as u8;
    Color::gray(level)
}

/// Resting shade value for a difficulty midpoint: `1 - map(mid, [0,1] → [0.2,0.7])`.
#[must_use]
pub fn mapped_difficulty(midpoint: f64) -> f64 {
    1.0 - map_range(midpoint.clamp(0.0, 1.0), 0.0, 1.0, SHADE_MIN, SHADE_MAX)
}

/// Marker color for `piece` in the given visual state.
///
/// Selection always wins over hover. Pure: equal inputs give equal colors.
#[must_use]
pub fn color_for(piece: &Piece, is_hovered: bool, is_selected: bool) -> Color {
    if is_selected {
        return HIGHLIGHT_COLOR;
    }

    let mapped = mapped_difficulty(piece.difficulty_midpoint());
    if is_hovered {
        grayscale(mapped - HOVER_DARKEN)
    } else {
        grayscale(mapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;

    fn piece_with(x1: f64, x2: f64) -> Piece {
        Piece::new(1, "Piece", "Composer", "period", Difficulty::new(x1, x2))
    }

    #[test]
    fn resting_shades_match_known_points() {
        assert_eq!(color_for(&piece_with(0.0, 0.0), false, false).to_string(), "#cccccc");
        assert_eq!(color_for(&piece_with(0.4, 0.6), false, false).to_string(), "#8c8c8c");
    }

    #[test]
    fn hover_darkens_resting_shade() {
        assert_eq!(color_for(&piece_with(0.0, 0.0), true, false).to_string(), "#999999");
        assert_eq!(color_for(&piece_with(0.4, 0.6), true, false).to_string(), "#595959");
    }

    #[test]
    fn selection_wins_regardless_of_hover_and_difficulty() {
        for (x1, x2) in [(0.0, 0.0), (0.3, 0.9), (1.0, 1.0)] {
            let piece = piece_with(x1, x2);
            assert_eq!(color_for(&piece, false, true), HIGHLIGHT_COLOR);
            assert_eq!(color_for(&piece, true, true), HIGHLIGHT_COLOR);
        }
        assert_eq!(HIGHLIGHT_COLOR.to_string(), "#dc2626");
    }

    #[test]
    fn mapping_is_deterministic() {
        let piece = piece_with(0.25, 0.75);
        for hovered in [false, true] {
            assert_eq!(color_for(&piece, hovered, false), color_for(&piece, hovered, false));
        }
    }

    #[test]
    fn harder_pieces_are_never_lighter() {
        let mut previous = u8::MAX;
        for step in 0..=100 {
            let mid = f64::from(step) / 100.0;
            let intensity = color_for(&piece_with(mid, mid), false, false).intensity();
            assert!(intensity <= previous, "midpoint {mid} got lighter");
            previous = intensity;
        }
    }

    #[test]
    fn malformed_difficulty_does_not_panic() {
        let mut piece = piece_with(f64::NAN, f64::INFINITY);
        let _ = color_for(&piece, true, false);
        piece.difficulty = None;
        assert_eq!(color_for(&piece, false, false), grayscale(mapped_difficulty(0.5)));
        let _ = color_for(&piece_with(-3.0, 7.0), true, false);
    }

    #[test]
    fn grayscale_clamps_input() {
        assert_eq!(grayscale(-0.5), Color::gray(0));
        assert_eq!(grayscale(1.5), Color::gray(255));
        assert_eq!(grayscale(f64::NAN), Color::gray(0));
        assert_eq!(grayscale(0.5).to_string(), "#808080");
    }

    #[test]
    fn hex_round_trip_for_theme_colors() {
        assert_eq!(Color::from_hex("#dc2626"), Some(HIGHLIGHT_COLOR));
        assert_eq!(Color::from_hex("dc2626"), Some(HIGHLIGHT_COLOR));
        assert_eq!(Color::from_hex("#xyz"), None);
    }

    #[test]
    fn map_range_handles_degenerate_source() {
        assert!((map_range(0.5, 0.0, 1.0, 0.2, 0.7) - 0.45).abs() < 1e-12);
        assert!((map_range(3.0, 1.0, 1.0, 0.2, 0.7) - 0.2).abs() < f64::EPSILON);
    }
}
