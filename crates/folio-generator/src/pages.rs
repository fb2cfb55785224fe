//! Page renderers.
//!
//! Each page builds its body from components, wraps it in the layout shell,
//! and renders the result into the document template.

use folio_core::{ContentItem, NavigationLink};
use folio_theme::Style;
use thiserror::Error;
use tracing::debug;

use crate::{
    components::{LayoutProps, RenderContext, escape_html, render_layout},
    template::{Template, TemplateContext, TemplateError},
};

/// File name of the stylesheet written in production builds.
pub const STYLESHEET_FILE: &str = "typography.css";

/// Page rendering errors.
#[derive(Debug, Error)]
pub enum PageError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Result type for page rendering.
pub type Result<T> = std::result::Result<T, PageError>;

/// Data for the home feed.
#[derive(Debug, Clone, Copy)]
pub struct HomeData<'a> {
    /// Title shown in the layout heading.
    pub site_title: &'a str,
    /// Header navigation entries.
    pub menu_links: &'a [NavigationLink],
    /// Posts, already in display order.
    pub items: &'a [ContentItem],
}

/// Data for the about page.
#[derive(Debug, Clone, Copy)]
pub struct AboutData<'a> {
    /// Title shown in the layout heading.
    pub site_title: &'a str,
    /// Header navigation entries.
    pub menu_links: &'a [NavigationLink],
    /// Rendered about content, if the site has any.
    pub html: Option<&'a str>,
}

/// Renders complete HTML documents.
#[derive(Debug)]
pub struct PageRenderer<'a> {
    ctx: RenderContext<'a>,
    document: Template,
}

impl<'a> PageRenderer<'a> {
    /// Create a renderer with the built-in templates.
    #[must_use]
    pub fn new(ctx: RenderContext<'a>) -> Self {
        Self {
            ctx,
            document: Template::document(),
        }
    }

    /// The render context.
    #[must_use]
    pub fn context(&self) -> &RenderContext<'a> {
        &self.ctx
    }

    /// Render the home feed at the site root.
    pub fn render_home(&self, data: &HomeData<'_>) -> Result<String> {
        debug!(items = data.items.len(), "rendering home page");

        let body: String = data.items.iter().map(|item| self.feed_entry(item)).collect();
        let pathname = self.ctx.config.root_path();
        let content = render_layout(
            &self.ctx,
            &LayoutProps {
                pathname: &pathname,
                title: data.site_title,
                menu_links: Some(data.menu_links),
                content: &body,
            },
        );

        let description = self.ctx.config.site.description.as_deref();
        self.document(data.site_title, description, &pathname, &content)
    }

    /// Render the about page.
    pub fn render_about(&self, data: &AboutData<'_>) -> Result<String> {
        debug!(has_content = data.html.is_some(), "rendering about page");

        let body = format!(
            "<div class=\"about-content\">{}</div>",
            data.html.unwrap_or_default()
        );
        let pathname = self.ctx.config.path_for("/about/");
        let content = render_layout(
            &self.ctx,
            &LayoutProps {
                pathname: &pathname,
                title: data.site_title,
                menu_links: Some(data.menu_links),
                content: &body,
            },
        );

        let title = format!("About | {}", data.site_title);
        self.document(&title, self.ctx.config.site.description.as_deref(), &pathname, &content)
    }

    /// Render a single post.
    pub fn render_post(&self, item: &ContentItem) -> Result<String> {
        debug!(slug = %item.slug, "rendering post");

        let site = &self.ctx.config.site;
        let title = item.display_title();
        let heading = self
            .ctx
            .typography
            .scale(1.0)
            .to_style()
            .with("margin-top", self.ctx.typography.rhythm(1.0))
            .with("margin-bottom", 0);
        let byline = Style::new()
            .with("display", "block")
            .with("margin-bottom", self.ctx.typography.rhythm(1.0));

        let body = format!(
            "<article>\n<header><h1 style=\"{}\">{}</h1><small style=\"{}\">{}</small></header>\n<section>{}</section>\n</article>",
            heading.to_inline(),
            escape_html(title),
            byline.to_inline(),
            byline_text(item),
            item.html,
        );

        let pathname = self.ctx.config.path_for(&item.slug);
        let content = render_layout(
            &self.ctx,
            &LayoutProps {
                pathname: &pathname,
                title: &site.title,
                menu_links: Some(&site.menu_links),
                content: &body,
            },
        );

        let description = item
            .description
            .as_deref()
            .or(item.spoiler.as_deref())
            .or(Some(item.excerpt.as_str()));
        let document_title = format!("{title} | {}", site.title);
        self.document(&document_title, description, &pathname, &content)
    }

    fn feed_entry(&self, item: &ContentItem) -> String {
        let heading = Style::new().with("margin-bottom", self.ctx.typography.rhythm(1.0 / 4.0));
        let link = Style::new().with("box-shadow", "none");
        let teaser = Style::new().with("font-size", "0.95rem");

        format!(
            "<div>\n<h3 style=\"{}\"><a style=\"{}\" href=\"{}\">{}</a></h3>\n<small>{}</small>\n<p style=\"{}\">{}</p>\n</div>\n",
            heading.to_inline(),
            link.to_inline(),
            escape_html(&self.ctx.href(&item.slug)),
            escape_html(item.display_title()),
            byline_text(item),
            teaser.to_inline(),
            item.teaser(),
        )
    }

    /// Wrap a rendered layout in the HTML document.
    fn document(
        &self,
        title: &str,
        description: Option<&str>,
        pathname: &str,
        body: &str,
    ) -> Result<String> {
        let config = self.ctx.config;
        let mut ctx = TemplateContext::new()
            .with_var("lang", escape_html(&config.site.language))
            .with_var("title", escape_html(title))
            .with_var("styles", self.styles())
            .with_var("body", body);

        if let Some(description) = description {
            ctx.insert("description", escape_html(description));
        }
        if let Some(author) = &config.site.author {
            ctx.insert("author", escape_html(author));
        }
        if !config.site.base_url.is_empty() {
            let relative = pathname
                .strip_prefix(config.site.base_path.trim_end_matches('/'))
                .unwrap_or(pathname);
            ctx.insert(
                "canonical",
                format!(
                    "<link rel=\"canonical\" href=\"{}\">",
                    escape_html(&config.url_for(relative))
                ),
            );
        }

        Ok(self.document.render(&ctx)?)
    }

    /// Inline typography in development, a stylesheet link in production.
    fn styles(&self) -> String {
        if self.ctx.config.build.environment.is_production() {
            format!(
                "<link rel=\"stylesheet\" href=\"{}\">",
                escape_html(&self.ctx.config.path_for(STYLESHEET_FILE))
            )
        } else {
            self.ctx.typography.style_element()
        }
    }
}

fn byline_text(item: &ContentItem) -> String {
    format!(
        "{} &bull; <b>{}</b>",
        escape_html(&item.date_formatted),
        escape_html(&item.reading_time.text)
    )
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use folio_core::{Environment, ParsedContent, frontmatter::parse_frontmatter};

    use super::*;
    use crate::components::test_support;

    fn item(source: &str, slug: &str) -> ContentItem {
        let (frontmatter, body) = parse_frontmatter(source, Path::new("post.md")).expect("frontmatter");
        let parsed = ParsedContent {
            frontmatter,
            html: format!("<p>{body}</p>"),
            raw: body,
        };
        ContentItem::from_parsed(parsed, slug, Path::new("post.md"))
    }

    fn posts() -> Vec<ContentItem> {
        vec![
            item(
                "---\ntitle: Newer\ndate: 2019-05-02\nspoiler: Short <em>spoiler</em>\n---\nbody one",
                "/newer/",
            ),
            item("---\ndate: 2019-01-10\n---\nOlder post text", "/untitled/"),
        ]
    }

    #[test]
    fn test_home_lists_items_in_given_order() {
        let config = test_support::config();
        let typography = test_support::typography();
        let renderer = PageRenderer::new(RenderContext::with_year(&config, &typography, 2026));
        let items = posts();

        let html = renderer
            .render_home(&HomeData {
                site_title: &config.site.title,
                menu_links: &config.site.menu_links,
                items: &items,
            })
            .unwrap();

        let newer = html.find("href=\"/newer/\">Newer</a></h3>").expect("newer");
        let older = html.find("href=\"/untitled/\">/untitled/</a></h3>").expect("older");
        assert!(newer < older);
        assert!(html.contains("<h3 style=\"margin-bottom: 0.4375rem\">"));
        assert!(html.contains("<small>May 02, 2019 &bull; <b>1 min read</b></small>"));
        assert!(html.contains("<p style=\"font-size: 0.95rem\">Short <em>spoiler</em></p>"));
        assert!(html.contains("<p style=\"font-size: 0.95rem\">Older post text</p>"));
        assert!(html.contains("<h1 "));
    }

    #[test]
    fn test_home_with_no_posts() {
        let config = test_support::config();
        let typography = test_support::typography();
        let renderer = PageRenderer::new(RenderContext::with_year(&config, &typography, 2026));

        let html = renderer
            .render_home(&HomeData {
                site_title: "Sam Eshun",
                menu_links: &[],
                items: &[],
            })
            .unwrap();

        assert!(html.contains("<main></main>"));
        assert!(html.contains("</ul></nav>"));
    }

    #[test]
    fn test_about_wraps_content() {
        let config = test_support::config();
        let typography = test_support::typography();
        let renderer = PageRenderer::new(RenderContext::with_year(&config, &typography, 2026));

        let html = renderer
            .render_about(&AboutData {
                site_title: &config.site.title,
                menu_links: &config.site.menu_links,
                html: Some("<h4>Tech Stack</h4>"),
            })
            .unwrap();

        assert!(html.contains("<main><div class=\"about-content\"><h4>Tech Stack</h4></div></main>"));
        assert!(html.contains("<title>About | Sam Eshun</title>"));
        assert!(html.contains("<h3 "));
    }

    #[test]
    fn test_about_without_content() {
        let config = test_support::config();
        let typography = test_support::typography();
        let renderer = PageRenderer::new(RenderContext::with_year(&config, &typography, 2026));

        let html = renderer
            .render_about(&AboutData {
                site_title: &config.site.title,
                menu_links: &config.site.menu_links,
                html: None,
            })
            .unwrap();
        assert!(html.contains("<div class=\"about-content\"></div>"));
    }

    #[test]
    fn test_post_page() {
        let config = test_support::config();
        let typography = test_support::typography();
        let renderer = PageRenderer::new(RenderContext::with_year(&config, &typography, 2026));
        let items = posts();

        let html = renderer.render_post(&items[0]).unwrap();
        assert!(html.contains(">Newer</h1>"));
        assert!(html.contains("<section><p>body one</p></section>"));
        assert!(html.contains("<title>Newer | Sam Eshun</title>"));
        assert!(html.contains("<h3 "));
    }

    #[test]
    fn test_styles_follow_environment() {
        let mut config = test_support::config();
        let typography = test_support::typography();

        let dev = PageRenderer::new(RenderContext::with_year(&config, &typography, 2026));
        let html = dev.render_post(&posts()[0]).unwrap();
        assert!(html.contains("<style id=\"typography\">"));

        config.build.environment = Environment::Production;
        let prod = PageRenderer::new(RenderContext::with_year(&config, &typography, 2026));
        let html = prod.render_post(&posts()[0]).unwrap();
        assert!(html.contains("<link rel=\"stylesheet\" href=\"/typography.css\">"));
        assert!(!html.contains("<style id=\"typography\">"));
    }

    #[test]
    fn test_canonical_link() {
        let mut config = test_support::config();
        config.site.base_url = "https://samueleshun.com".to_string();
        config.site.base_path = "/blog".to_string();
        let typography = test_support::typography();
        let renderer = PageRenderer::new(RenderContext::with_year(&config, &typography, 2026));

        let html = renderer.render_post(&posts()[0]).unwrap();
        assert!(html.contains("<link rel=\"canonical\" href=\"https://samueleshun.com/blog/newer/\">"));
    }
}
