//! Content types shared between the collector and the page components.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::frontmatter::Frontmatter;

/// Words read per minute when estimating reading time.
pub const WORDS_PER_MINUTE: usize = 200;

/// Maximum excerpt length in characters.
pub const EXCERPT_LENGTH: usize = 140;

/// Display format for post dates, e.g. "March 02, 2019".
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// Parsed content with metadata and rendered HTML.
#[derive(Debug, Clone)]
pub struct ParsedContent {
    /// Parsed frontmatter metadata.
    pub frontmatter: Frontmatter,

    /// Rendered HTML content.
    pub html: String,

    /// Raw source content (without frontmatter).
    pub raw: String,
}

/// Estimated reading time for a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingTime {
    /// Whole minutes, at least one.
    pub minutes: u32,

    /// Word count used for the estimate.
    pub words: u32,

    /// Human-readable form, e.g. "3 min read".
    pub text: String,
}

impl ReadingTime {
    /// Estimate reading time from raw text.
    pub fn estimate(text: &str) -> Self {
        let words = text.split_whitespace().count();
        let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1) as u32;
        Self {
            minutes,
            words: words as u32,
            text: format!("{minutes} min read"),
        }
    }
}

/// A post ready for rendering. Page components only ever read these.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentItem {
    /// Post title.
    pub title: String,

    /// URL slug, wrapped in slashes (`/hello-world/`).
    pub slug: String,

    /// Publication date.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,

    /// Date formatted for display, empty when undated.
    #[serde(default)]
    pub date_formatted: String,

    /// Description from frontmatter.
    #[serde(default)]
    pub description: Option<String>,

    /// Teaser from frontmatter, preferred over the excerpt in listings.
    #[serde(default)]
    pub spoiler: Option<String>,

    /// Plain-text excerpt of the body.
    #[serde(default)]
    pub excerpt: String,

    /// Reading time estimate.
    pub reading_time: ReadingTime,

    /// Rendered body HTML.
    pub html: String,

    /// Whether this is a draft.
    #[serde(default)]
    pub draft: bool,

    /// Source file path.
    #[serde(default)]
    pub source_path: Option<PathBuf>,
}

impl ContentItem {
    /// Create an item from parsed content and its slug.
    pub fn from_parsed(content: ParsedContent, slug: impl Into<String>, path: &Path) -> Self {
        let fm = content.frontmatter;

        let reading_time = ReadingTime::estimate(&content.raw);
        let excerpt = truncate_at_word_boundary(strip_html(&content.html).trim(), EXCERPT_LENGTH);
        let date_formatted = fm
            .date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default();

        Self {
            title: fm.title,
            slug: slug.into(),
            date: fm.date,
            date_formatted,
            description: fm.description,
            spoiler: fm.spoiler,
            excerpt,
            reading_time,
            html: content.html,
            draft: fm.draft,
            source_path: Some(path.to_path_buf()),
        }
    }

    /// Title for display, falling back to the slug for untitled posts.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.slug
        } else {
            &self.title
        }
    }

    /// Listing teaser: the spoiler, else the excerpt, else nothing.
    pub fn teaser(&self) -> &str {
        self.spoiler
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.excerpt)
    }
}

/// Derive a post slug from its path relative to the posts directory.
///
/// `hello-world.md` and `hello-world/index.md` both become `/hello-world/`.
pub fn slug_from_relative_path(relative: &Path) -> String {
    let without_ext = relative.with_extension("");
    let mut parts: Vec<String> = without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .filter(|p| !p.is_empty())
        .collect();

    if parts.last().is_some_and(|last| last == "index") {
        parts.pop();
    }

    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", parts.join("/"))
    }
}

/// Strip HTML tags from content.
pub fn strip_html(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Truncate text at word boundary, respecting UTF-8 character boundaries.
fn truncate_at_word_boundary(text: &str, max_chars: usize) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() <= max_chars {
        return text;
    }

    let truncate_byte_idx = text
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());

    let truncated = &text[..truncate_byte_idx];

    match truncated.rfind(' ') {
        Some(last_space) => format!("{}…", &truncated[..last_space]),
        None => format!("{truncated}…"),
    }
}
