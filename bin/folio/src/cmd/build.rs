//! Build command - generates the static site

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use color_eyre::eyre::{Result, WrapErr};
use folio_core::{Config, Environment};
use folio_generator::{BuildStats, Builder};

use crate::{CONTENT_DIR, STATIC_DIR, load_typography, site_root};

/// Options for a build.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Output directory. Defaults to `build.output_dir` under the site root.
    pub output: Option<PathBuf>,
    /// Include draft posts.
    pub drafts: bool,
    /// Build for production.
    pub production: bool,
}

/// Run the build command.
///
/// Builds the static site from content files to the output directory.
pub fn run(config_path: &Path, options: &BuildOptions) -> Result<BuildStats> {
    let start = Instant::now();
    tracing::info!(?config_path, ?options, "Starting build");

    let mut config =
        Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;

    if options.drafts {
        config.build.drafts = true;
    }
    if options.production {
        config.build.environment = Environment::Production;
    }

    let root = site_root(config_path);
    let output = options
        .output
        .clone()
        .unwrap_or_else(|| root.join(&config.build.output_dir));

    let stats = build_site(&config, &root, &output)?;
    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Posts:       {}", stats.posts);
    println!("  Pages:       {}", stats.pages);
    if stats.failed > 0 {
        println!("  Failed:      {}", stats.failed);
    }
    println!("  Assets:      {}", stats.assets);
    println!("  Environment: {}", config.build.environment);
    println!();
    println!("  Duration:    {:.2}s", duration.as_secs_f64());
    println!("  Output:      {}", output.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(stats)
}

/// Build `config`'s site from `root` into `output`.
pub fn build_site(config: &Config, root: &Path, output: &Path) -> Result<BuildStats> {
    tracing::debug!(?config, "Loaded configuration");

    let typography = load_typography(config).wrap_err("Failed to load typography theme")?;

    let mut builder = Builder::new(config, &typography, root.join(CONTENT_DIR), output);

    let static_dir = root.join(STATIC_DIR);
    if static_dir.is_dir() {
        tracing::info!("Found static directory, will copy to output");
        builder = builder.with_static_dir(static_dir);
    }

    builder.build().wrap_err("Build failed")
}
