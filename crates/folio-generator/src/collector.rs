//! Content collection.
//!
//! Walks `posts/` under the content directory, parses every markdown file and
//! returns the posts newest first, together with the about page.

use std::{
    cmp::Ordering,
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use folio_core::{Config, ContentItem, content::slug_from_relative_path};
use folio_parser::MarkdownParser;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Directory holding posts, relative to the content directory.
pub const POSTS_DIR: &str = "posts";

/// About page source, relative to the content directory.
pub const ABOUT_FILE: &str = "about.md";

/// Content collection errors.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk error.
    #[error("failed to walk content directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Parser error.
    #[error("parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Result type for collector operations.
pub type Result<T> = std::result::Result<T, CollectorError>;

/// Collected site content.
#[derive(Debug, Default)]
pub struct SiteContent {
    /// Published posts, newest first.
    pub posts: Vec<ContentItem>,

    /// The about page, if the site has one.
    pub about: Option<ContentItem>,

    /// Files that failed to parse and were skipped.
    pub skipped: Vec<PathBuf>,

    /// Posts dropped because an earlier post in sort order already has
    /// their slug.
    pub duplicates: Vec<ContentItem>,
}

/// Content collector that walks directories and parses files.
#[derive(Debug)]
pub struct ContentCollector {
    parser: MarkdownParser,
    content_dir: PathBuf,
    include_drafts: bool,
}

impl ContentCollector {
    /// Create a new content collector.
    #[must_use]
    pub fn new(config: &Config, content_dir: impl Into<PathBuf>) -> Self {
        Self {
            parser: MarkdownParser::with_theme(&config.build.syntax_theme),
            content_dir: content_dir.into(),
            include_drafts: config.build.drafts,
        }
    }

    /// Collect all content from the content directory.
    pub fn collect(&self) -> Result<SiteContent> {
        info!(dir = %self.content_dir.display(), "collecting content");

        let posts_dir = self.content_dir.join(POSTS_DIR);
        let files = find_markdown_files(&posts_dir)?;
        info!(count = files.len(), "found post files");

        let parsed: Vec<_> = files
            .par_iter()
            .map(|path| (path, self.parse_post(&posts_dir, path)))
            .collect();

        let mut content = SiteContent::default();
        for (path, result) in parsed {
            match result {
                Ok(item) if item.draft && !self.include_drafts => {
                    debug!(slug = %item.slug, "skipping draft");
                }
                Ok(item) => content.posts.push(item),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse file");
                    content.skipped.push(path.clone());
                }
            }
        }
        sort_posts(&mut content.posts);
        content.duplicates = dedup_slugs(&mut content.posts);

        let about_path = self.content_dir.join(ABOUT_FILE);
        if about_path.is_file() {
            match self.parse_file(&about_path, "/about/") {
                Ok(about) => content.about = Some(about),
                Err(e) => {
                    warn!(path = %about_path.display(), error = %e, "failed to parse about page");
                    content.skipped.push(about_path);
                }
            }
        } else {
            debug!(path = %about_path.display(), "no about page");
        }

        info!(
            posts = content.posts.len(),
            about = content.about.is_some(),
            skipped = content.skipped.len(),
            duplicates = content.duplicates.len(),
            "content collection complete"
        );

        Ok(content)
    }

    fn parse_post(&self, posts_dir: &Path, path: &Path) -> Result<ContentItem> {
        let relative = path.strip_prefix(posts_dir).unwrap_or(path);
        self.parse_file(path, &slug_from_relative_path(relative))
    }

    /// Parse a single markdown file into a content item.
    fn parse_file(&self, path: &Path, slug: &str) -> Result<ContentItem> {
        debug!(path = %path.display(), slug, "parsing file");

        let source = fs::read_to_string(path)?;
        let parsed = self
            .parser
            .parse(&source, path)
            .map_err(|e| CollectorError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(ContentItem::from_parsed(parsed, slug, path))
    }
}

/// Find markdown files under `dir`, skipping hidden entries.
///
/// A missing directory yields no files.
pub fn find_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
        {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Sort posts newest first. Undated posts go last; ties fall back to the slug.
pub fn sort_posts(posts: &mut [ContentItem]) {
    posts.sort_by(|a, b| match (&b.date, &a.date) {
        (Some(b_date), Some(a_date)) => b_date.cmp(a_date).then_with(|| a.slug.cmp(&b.slug)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.slug.cmp(&b.slug),
    });
}

/// Keep the first post for every slug and return the ones removed.
///
/// Run after [`sort_posts`] so the newest post wins.
pub fn dedup_slugs(posts: &mut Vec<ContentItem>) -> Vec<ContentItem> {
    let mut seen = HashSet::new();
    let (kept, dropped): (Vec<_>, Vec<_>) = std::mem::take(posts)
        .into_iter()
        .partition(|post| seen.insert(post.slug.clone()));
    *posts = kept;
    dropped
}
