//! Build orchestration.
//!
//! Coordinates the full site build process.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use folio_core::{Config, ContentItem};
use folio_theme::Typography;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    assets::{AssetError, copy_assets},
    collector::{CollectorError, ContentCollector, SiteContent},
    components::RenderContext,
    pages::{AboutData, HomeData, PageError, PageRenderer, STYLESHEET_FILE},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Collector error.
    #[error("collector error: {0}")]
    Collector(#[from] CollectorError),

    /// Page rendering error.
    #[error("page error: {0}")]
    Page(#[from] PageError),

    /// Asset error.
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),

    /// A post would overwrite another page.
    #[error("post {slug} collides with another page")]
    SlugCollision { slug: String },
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of post pages written.
    pub posts: usize,

    /// Total number of HTML pages written, posts included.
    pub pages: usize,

    /// Number of posts that failed to render.
    pub failed: usize,

    /// Number of assets copied.
    pub assets: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Site builder that orchestrates the build process.
#[derive(Debug)]
pub struct Builder<'a> {
    config: &'a Config,
    typography: &'a Typography,
    content_dir: PathBuf,
    output_dir: PathBuf,
    static_dir: Option<PathBuf>,
}

impl<'a> Builder<'a> {
    /// Create a new builder.
    #[must_use]
    pub fn new(
        config: &'a Config,
        typography: &'a Typography,
        content_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config,
            typography,
            content_dir: content_dir.into(),
            output_dir: output_dir.into(),
            static_dir: None,
        }
    }

    /// Set the static assets directory.
    #[must_use]
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Execute the full build process.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        info!(
            content = %self.content_dir.display(),
            output = %self.output_dir.display(),
            environment = %self.config.build.environment,
            "starting build"
        );

        // 1. Clean output directory
        self.clean_output()?;

        // 2. Collect content
        let content = ContentCollector::new(self.config, &self.content_dir).collect()?;

        // 3. Render pages
        let renderer = PageRenderer::new(RenderContext::new(self.config, self.typography));
        self.generate_home(&renderer, &content)?;
        self.generate_about(&renderer, &content)?;
        let (written, failed) = self.generate_posts(&renderer, &content.posts);
        for post in &content.duplicates {
            let error = BuildError::SlugCollision {
                slug: post.slug.clone(),
            };
            warn!(slug = %post.slug, path = ?post.source_path, error = %error, "skipping duplicate post");
        }
        stats.posts = written;
        stats.failed = failed + content.duplicates.len();
        stats.pages = written + 2;

        // 4. Write the stylesheet
        if self.config.build.environment.is_production() {
            self.write_stylesheet()?;
        }

        // 5. Copy static assets
        if let Some(ref static_dir) = self.static_dir {
            stats.assets = copy_assets(static_dir, &self.output_dir)?;
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            posts = stats.posts,
            pages = stats.pages,
            failed = stats.failed,
            assets = stats.assets,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Clean the output directory.
    fn clean_output(&self) -> Result<()> {
        if self.output_dir.exists() {
            debug!(dir = %self.output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(&self.output_dir)?;
        }
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    fn generate_home(&self, renderer: &PageRenderer<'_>, content: &SiteContent) -> Result<()> {
        let site = &self.config.site;
        let html = renderer.render_home(&HomeData {
            site_title: &site.title,
            menu_links: &site.menu_links,
            items: &content.posts,
        })?;
        write_page(&self.output_dir.join("index.html"), &html)
    }

    fn generate_about(&self, renderer: &PageRenderer<'_>, content: &SiteContent) -> Result<()> {
        let site = &self.config.site;
        let html = renderer.render_about(&AboutData {
            site_title: &site.title,
            menu_links: &site.menu_links,
            html: content.about.as_ref().map(|about| about.html.as_str()),
        })?;
        write_page(&self.output_dir.join("about").join("index.html"), &html)
    }

    /// Render posts in parallel. Returns the written and failed counts.
    fn generate_posts(&self, renderer: &PageRenderer<'_>, posts: &[ContentItem]) -> (usize, usize) {
        info!(count = posts.len(), "generating post pages");

        let results: Vec<_> = posts
            .par_iter()
            .map(|post| {
                let path = post_output_path(&self.output_dir, &post.slug)?;
                let html = renderer.render_post(post)?;
                write_page(&path, &html)
            })
            .collect();

        let mut written = 0;
        let mut failed = 0;
        for (post, result) in posts.iter().zip(results) {
            match result {
                Ok(()) => written += 1,
                Err(e) => {
                    warn!(slug = %post.slug, error = %e, "failed to generate post");
                    failed += 1;
                }
            }
        }

        (written, failed)
    }

    fn write_stylesheet(&self) -> Result<()> {
        let path = self.output_dir.join(STYLESHEET_FILE);
        fs::write(&path, self.typography.css())?;
        debug!(path = %path.display(), "wrote stylesheet");
        Ok(())
    }
}

/// Output path of a post: `<slug>/index.html`.
fn post_output_path(output_dir: &Path, slug: &str) -> Result<PathBuf> {
    let relative = slug.trim_matches('/');
    if relative.is_empty() || relative == "about" {
        return Err(BuildError::SlugCollision {
            slug: slug.to_string(),
        });
    }
    Ok(output_dir.join(relative).join("index.html"))
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    debug!(path = %path.display(), "wrote page");
    Ok(())
}
