//! Structured logging setup.
//!
//! The crate instruments itself with `tracing` spans and events (one debug
//! span per handled event, per visible-collection refresh, per suggestion
//! pass). This module installs the subscriber that prints them.
//!
//! # Configuration
//!
//! The filter is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use canplayit::observability::init_tracing;
//! use canplayit::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("explorer initialized");
//! ```

mod init;

pub use init::init_tracing;
