//! Theme management and ANSI escape sequence generation.
//!
//! Supports the built-in `light` and `dark` themes and custom themes loaded
//! from TOML files. Difficulty swatches come from [`Color`] values and are
//! styled with [`Theme::fg_color`] / [`Theme::bg_color`]; everything else uses
//! the hex strings of the active palette.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#1f2937"
//! selection_fg = "#ffffff"
//! selection_bg = "#dc2626"
//! text_normal = "#111827"
//! text_dim = "#6b7280"
//! border = "#d1d5db"
//! search_bar_border = "#4b5563"
//! match_highlight_fg = "#111827"
//! match_highlight_bg = "#fde68a"
//! empty_state_fg = "#2563eb"
//! error_fg = "#b91c1c"
//! pager_active_fg = "#ffffff"
//! pager_active_bg = "#1f2937"
//! ```
//!
//! # Example
//!
//! ```rust
//! use canplayit::Theme;
//!
//! let theme = Theme::from_name("dark").unwrap();
//! print!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert!(Theme::fg(&theme.colors.header_fg).starts_with("\u{1b}[38;2;"));
//! ```

use crate::catalog::Color;
use crate::domain::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "light";

const LIGHT: &str = include_str!("../../themes/light.toml");
const DARK: &str = include_str!("../../themes/dark.toml");

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected list row.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, placeholders and secondary columns.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    /// Fuzzy suggestion highlight.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Load failures and rejected filters.
    pub error_fg: String,

    /// Current page button.
    pub pager_active_fg: String,
    pub pager_active_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name (`light` or `dark`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "light" => LIGHT,
            "dark" => DARK,
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Theme`] if its contents are not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents).map_err(|e| CatalogError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Palette color parsed into a [`Color`]; unparseable values fall back to white.
    fn parse(hex: &str) -> Color {
        Color::from_hex(hex).unwrap_or(Color::gray(255))
    }

    /// ANSI 24-bit foreground escape for a hex palette color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        Self::fg_color(Self::parse(hex))
    }

    /// ANSI 24-bit background escape for a hex palette color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        Self::bg_color(Self::parse(hex))
    }

    #[must_use]
    pub fn fg_color(color: Color) -> String {
        format!("\u{001b}[38;2;{};{};{}m", color.r, color.g, color.b)
    }

    #[must_use]
    pub fn bg_color(color: Color) -> String {
        format!("\u{001b}[48;2;{};{};{}m", color.r, color.g, color.b)
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The built-in light theme.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(|| Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors::monochrome(),
        })
    }
}

impl ThemeColors {
    /// Plain black-on-white palette used if a built-in theme fails to parse.
    fn monochrome() -> Self {
        let black = "#000000".to_string();
        let white = "#ffffff".to_string();
        Self {
            header_fg: black.clone(),
            header_bg: None,
            selection_fg: white.clone(),
            selection_bg: black.clone(),
            text_normal: black.clone(),
            text_dim: "#808080".to_string(),
            border: black.clone(),
            search_bar_border: black.clone(),
            match_highlight_fg: white.clone(),
            match_highlight_bg: black.clone(),
            empty_state_fg: black.clone(),
            error_fg: black.clone(),
            pager_active_fg: white,
            pager_active_bg: black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::from_name("light").map(|t| t.name), Some("light".to_string()));
        assert_eq!(Theme::from_name("dark").map(|t| t.name), Some("dark".to_string()));
        assert!(Theme::from_name("solarized").is_none());
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn escapes_use_palette_channels() {
        assert_eq!(Theme::fg("#dc2626"), "\u{1b}[38;2;220;38;38m");
        assert_eq!(Theme::bg("cccccc"), "\u{1b}[48;2;204;204;204m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_file_round_trips_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LIGHT.replace("name = \"light\"", "name = \"mine\"").as_bytes())
            .unwrap();
        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "mine");
    }

    #[test]
    fn invalid_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(CatalogError::Theme(_))));
    }
}
