//! folio CLI library
//!
//! Command implementations for the `folio` binary, exposed as a library so
//! they can be tested and reused.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, check, serve)
//! - [`server`] - Static file server for the built site

pub mod cmd;
pub mod server;

use std::path::{Path, PathBuf};

pub use folio_core::Config;
use folio_theme::{StyleRules, Typography, site_overrides};
pub use folio_generator::{BuildStats, Builder, ContentCollector, SiteContent};

/// Content directory, relative to the site root.
pub const CONTENT_DIR: &str = "content";

/// Static asset directory, relative to the site root.
pub const STATIC_DIR: &str = "static";

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Build the site typography: the configured preset, the built-in override
/// table, then any overrides from the config file.
pub fn load_typography(config: &Config) -> folio_theme::Result<Typography> {
    let overrides =
        site_overrides().merged(StyleRules::from(config.theme.overrides.clone()));
    Typography::from_preset(&config.theme.base, overrides)
}

/// The directory holding the config file. Content and static paths resolve
/// against it.
#[must_use]
pub fn site_root(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
