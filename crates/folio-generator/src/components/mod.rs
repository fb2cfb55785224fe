//! Stateless page components.
//!
//! Every component is a plain function from explicit inputs to HTML. Spacing
//! and font sizes come from the [`Typography`] passed in through
//! [`RenderContext`]; nothing is read from global state.

pub mod footer;
pub mod layout;
pub mod nav;

use folio_core::Config;
use folio_theme::Typography;

pub use footer::{FOOTER_LINKS, OutboundLink, current_year, render_footer};
pub use layout::{HeaderVariant, LayoutProps, header_variant, render_layout};
pub use nav::render_nav;

/// Inputs shared by every component during one render.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Site configuration.
    pub config: &'a Config,
    /// Merged typography.
    pub typography: &'a Typography,
    /// Year printed in the footer.
    pub year: i32,
}

impl<'a> RenderContext<'a> {
    /// Create a context stamped with the current year.
    #[must_use]
    pub fn new(config: &'a Config, typography: &'a Typography) -> Self {
        Self::with_year(config, typography, current_year())
    }

    /// Create a context with a fixed footer year.
    #[must_use]
    pub fn with_year(config: &'a Config, typography: &'a Typography, year: i32) -> Self {
        Self {
            config,
            typography,
            year,
        }
    }

    /// Resolve an internal link against the base path. Absolute URLs,
    /// `mailto:` links and fragments pass through.
    #[must_use]
    pub fn href(&self, link: &str) -> String {
        if link.starts_with('/') {
            self.config.path_for(link)
        } else {
            link.to_string()
        }
    }
}

/// Escape text for HTML element content and attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_href_respects_base_path() {
        let mut config = test_support::config();
        let typography = test_support::typography();
        config.site.base_path = "/blog".to_string();
        let ctx = RenderContext::with_year(&config, &typography, 2026);

        assert_eq!(ctx.href("/about"), "/blog/about");
        assert_eq!(ctx.href("/"), "/blog/");
        assert_eq!(ctx.href("https://github.com"), "https://github.com");
        assert_eq!(ctx.href("mailto:a@b.c"), "mailto:a@b.c");
    }
}
