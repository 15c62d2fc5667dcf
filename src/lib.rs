//! Can I Play It?: view-state core of a sheet music catalog explorer.
//!
//! The explorer lets a pianist look through a catalog of pieces annotated
//! with a difficulty range:
//! - Exact title search with live fuzzy suggestions
//! - Optional author / year / difficulty / key filtering
//! - A paginated list view (7 pieces per page by default)
//! - A map view coloring each piece by difficulty, gated by a login prompt
//! - Click-through navigation to a piece's detail page

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal host (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Store with snapshots and subscribers             │
//! │  - Event handling / action emission                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog       │   │ Source        │
//! │ (ui/)         │   │ (catalog/)    │   │ (source/)     │
//! │ - Rendering   │   │ - Search      │   │ - Requests    │
//! │ - Theming     │   │ - Filter      │   │ - Payloads    │
//! │ - Components  │   │ - Pages/Color │   │ - File source │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): Piece model, errors              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Pure search, filter, pagination and color operations
//! - [`domain`]: Core domain types (Piece, errors)
//! - [`source`]: Request descriptions and payload decoding
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: `tracing` subscriber setup
//!
//! # Configuration
//!
//! ```toml
//! api_host = "https://api.example.org"
//! endpoint = "api"        # or "legacy" for GET /pieces
//! items_per_page = 7
//! apply_filters = false
//! login_delay_secs = 5
//! allow_skip = true
//! skip_timeout_secs = 10
//! theme_name = "dark"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use canplayit::app::{AnonymousSession, Action, Event, Store};
//! use canplayit::{load_theme, Config, Difficulty, Piece};
//!
//! let config = Config::default();
//! let mut store = Store::new(&config, load_theme(&config), AnonymousSession);
//!
//! let actions = store.dispatch(&Event::Mounted)?;
//! assert!(matches!(actions[0], Action::Fetch(_)));
//!
//! let pieces = vec![Piece::new(1, "Prelude", "Bach", "baroque", Difficulty::new(0.1, 0.3))];
//! store.dispatch(&Event::PiecesLoaded(pieces))?;
//! assert_eq!(store.state().visible_pieces.len(), 1);
//! # Ok::<(), canplayit::CatalogError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod observability;
pub mod source;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Store};
pub use domain::{CatalogError, Difficulty, Piece, PieceId, Result};
pub use source::Endpoint;
pub use ui::Theme;

use catalog::DEFAULT_ITEMS_PER_PAGE;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Explorer configuration.
///
/// Built from a string map supplied by an embedding host
/// ([`Config::from_map`]) or from a TOML file ([`Config::from_file`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the pieces API, without trailing slash.
    ///
    /// Default: `http://localhost:5000`
    pub api_host: String,

    /// Collection route: `api` (`/api/pieces`, default) or `legacy` (`/pieces`).
    pub endpoint: Endpoint,

    /// List view page size. Must be positive. Default: 7
    pub items_per_page: usize,

    /// Whether submitted filter criteria restrict the visible pieces.
    ///
    /// Off by default: the form is captured but the full collection is shown.
    pub apply_filters: bool,

    /// Seconds in map mode before an anonymous user is asked to log in.
    pub login_delay_secs: u64,

    /// Whether the login prompt offers a skip button.
    pub allow_skip: bool,

    /// Seconds before the skip button appears.
    pub skip_timeout_secs: u64,

    /// Built-in theme name: `light` or `dark`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `tracing` filter directive: `trace`, `debug`, `info`, ... Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: "http://localhost:5000".to_string(),
            endpoint: Endpoint::Api,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            apply_filters: false,
            login_delay_secs: 5,
            allow_skip: true,
            skip_timeout_secs: 10,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a host-provided string map.
    ///
    /// Unknown keys are ignored and unparseable values fall back to their
    /// defaults, so a typo never prevents the page from mounting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use canplayit::{Config, Endpoint};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("endpoint".to_string(), "legacy".to_string());
    /// map.insert("items_per_page".to_string(), "ten".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.endpoint, Endpoint::Legacy);
    /// assert_eq!(config.items_per_page, 7);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let api_host = config
            .get("api_host")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.api_host);

        let endpoint = config
            .get("endpoint")
            .and_then(|s| Endpoint::from_name(s))
            .unwrap_or(defaults.endpoint);

        let items_per_page = config
            .get("items_per_page")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.items_per_page);

        let parse_flag = |key: &str, default: bool| {
            config
                .get(key)
                .and_then(|s| s.trim().parse::<bool>().ok())
                .unwrap_or(default)
        };
        let parse_secs = |key: &str, default: u64| {
            config
                .get(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        Self {
            api_host,
            endpoint,
            items_per_page,
            apply_filters: parse_flag("apply_filters", defaults.apply_filters),
            login_delay_secs: parse_secs("login_delay_secs", defaults.login_delay_secs),
            allow_skip: parse_flag("allow_skip", defaults.allow_skip),
            skip_timeout_secs: parse_secs("skip_timeout_secs", defaults.skip_timeout_secs),
            theme_name: config.get("theme").or_else(|| config.get("theme_name")).cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Loads configuration from a TOML file. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Config`] for unknown keys, wrong types, or an
    /// `items_per_page` of zero.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// See [`Config::from_file`].
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(contents).map_err(|e| CatalogError::Config(format!("invalid config TOML: {e}")))?;
        config.api_host = config.api_host.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.items_per_page == 0 {
            return Err(CatalogError::Config("items_per_page must be positive".to_string()));
        }
        if self.api_host.is_empty() {
            return Err(CatalogError::Config("api_host must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Resolves the configured theme: file first, then name, then the default.
///
/// Failures are logged and fall back to [`Theme::default`].
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    )
}

/// Creates the state of a freshly mounted explorer page.
///
/// # Example
///
/// ```rust
/// use canplayit::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.pieces.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_host = %config.api_host, endpoint = ?config.endpoint, "initializing catalog explorer");
    AppState::new(config, load_theme(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_map_reads_typed_values() {
        let map: BTreeMap<String, String> = [
            ("api_host", "https://api.example.org/"),
            ("items_per_page", "10"),
            ("apply_filters", "true"),
            ("login_delay_secs", "3"),
            ("allow_skip", "false"),
            ("theme", "dark"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_map(&map);
        assert_eq!(config.api_host, "https://api.example.org");
        assert_eq!(config.items_per_page, 10);
        assert!(config.apply_filters);
        assert_eq!(config.login_delay_secs, 3);
        assert!(!config.allow_skip);
        assert_eq!(config.skip_timeout_secs, 10);
        assert_eq!(config.theme_name.as_deref(), Some("dark"));
    }

    #[test]
    fn from_map_rejects_zero_page_size() {
        let map: BTreeMap<String, String> =
            std::iter::once(("items_per_page".to_string(), "0".to_string())).collect();
        assert_eq!(Config::from_map(&map).items_per_page, DEFAULT_ITEMS_PER_PAGE);
    }

    #[test]
    fn from_toml_is_strict() {
        let config = Config::from_toml("endpoint = \"legacy\"\napply_filters = true\n").unwrap();
        assert_eq!(config.endpoint, Endpoint::Legacy);
        assert!(config.apply_filters);
        assert_eq!(config.items_per_page, 7);

        assert!(matches!(Config::from_toml("items_per_page = 0"), Err(CatalogError::Config(_))));
        assert!(matches!(Config::from_toml("scan_depth = 4"), Err(CatalogError::Config(_))));
        assert!(matches!(Config::from_toml("endpoint = \"graphql\""), Err(CatalogError::Config(_))));
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("solarized".to_string()),
            ..Config::default()
        };
        assert_eq!(load_theme(&config).name, Theme::default().name);

        let config = Config {
            theme_name: Some("dark".to_string()),
            ..Config::default()
        };
        assert_eq!(load_theme(&config).name, "dark");
    }
}
