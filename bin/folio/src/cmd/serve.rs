//! Serve command - build in development mode and preview locally

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use folio_core::{Config, Environment};

use super::build::build_site;
use crate::{server, site_root};

/// Run the serve command.
///
/// Builds the site with typography inlined into every page, then serves the
/// output directory until interrupted.
pub async fn run(config_path: &Path, port: u16, output: Option<PathBuf>) -> Result<()> {
    tracing::info!(?config_path, port, "Starting preview server");

    let mut config =
        Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    config.build.environment = Environment::Development;
    config.build.drafts = true;

    let root = site_root(config_path);
    let output = output.unwrap_or_else(|| root.join(&config.build.output_dir));

    let build_config = config.clone();
    let build_output = output.clone();
    let stats = tokio::task::spawn_blocking(move || build_site(&build_config, &root, &build_output))
        .await
        .wrap_err("Build task panicked")??;

    println!();
    println!("  Built {} posts ({} pages)", stats.posts, stats.pages);

    server::serve(&output, &config.site.base_path, port).await
}
