//! The page shell shared by every page.

use folio_core::NavigationLink;
use folio_theme::Style;
use folio_theme::overrides::ACCENT;

use super::{RenderContext, escape_html, footer::render_footer, nav::render_nav};

/// Inputs to [`render_layout`].
#[derive(Debug, Clone, Copy)]
pub struct LayoutProps<'a> {
    /// Path of the page being rendered, including the base path.
    pub pathname: &'a str,
    /// Heading text.
    pub title: &'a str,
    /// Header navigation entries.
    pub menu_links: Option<&'a [NavigationLink]>,
    /// Page body, inserted verbatim.
    pub content: &'a str,
}

/// Which heading the shell renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVariant {
    /// Large `<h1>` title, used on the site root.
    LargeTitle,
    /// Small `<h3>` link back to the root.
    SmallLink,
}

/// Pick the heading variant for `pathname`.
#[must_use]
pub fn header_variant(ctx: &RenderContext<'_>, pathname: &str) -> HeaderVariant {
    if pathname == ctx.config.root_path() {
        HeaderVariant::LargeTitle
    } else {
        HeaderVariant::SmallLink
    }
}

/// Render the shell: navigation, heading, main content and footer.
#[must_use]
pub fn render_layout(ctx: &RenderContext<'_>, props: &LayoutProps<'_>) -> String {
    let typography = ctx.typography;
    let root = escape_html(&ctx.config.root_path());
    let title = escape_html(props.title);

    let header = match header_variant(ctx, props.pathname) {
        HeaderVariant::LargeTitle => {
            let heading = typography
                .scale(1.2)
                .to_style()
                .with("margin-bottom", typography.rhythm(1.5))
                .with("margin-top", 0);
            let link = Style::new()
                .with("box-shadow", "none")
                .with("text-decoration", "none")
                .with("color", "inherit");
            format!(
                "<h1 style=\"{}\"><a style=\"{}\" href=\"{root}\">{title}</a></h1>",
                heading.to_inline(),
                link.to_inline()
            )
        }
        HeaderVariant::SmallLink => {
            let heading = Style::new()
                .with("font-family", "Nunito, sans-serif")
                .with("margin-top", 0);
            let link = Style::new()
                .with("box-shadow", "none")
                .with("text-decoration", "none")
                .with("color", ACCENT);
            format!(
                "<h3 style=\"{}\"><a style=\"{}\" href=\"{root}\">{title}</a></h3>",
                heading.to_inline(),
                link.to_inline()
            )
        }
    };

    let container = Style::new()
        .with("margin-left", "auto")
        .with("margin-right", "auto")
        .with("max-width", typography.rhythm(24.0))
        .with(
            "padding",
            format!("{} {}", typography.rhythm(1.5), typography.rhythm(3.0 / 4.0)),
        );

    format!(
        "<div style=\"{}\">\n{}\n<header>{header}</header>\n<main>{}</main>\n{}\n</div>",
        container.to_inline(),
        render_nav(ctx, props.menu_links),
        props.content,
        render_footer(typography, ctx.year),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support;

    fn render(pathname: &str, config: &folio_core::Config) -> String {
        let typography = test_support::typography();
        let ctx = RenderContext::with_year(config, &typography, 2026);
        render_layout(
            &ctx,
            &LayoutProps {
                pathname,
                title: "Sam Eshun",
                menu_links: Some(&config.site.menu_links),
                content: "<p>body</p>",
            },
        )
    }

    #[test]
    fn test_root_uses_large_title() {
        let config = test_support::config();
        let html = render("/", &config);

        assert!(html.contains("<h1 style=\"font-size: 3.00281rem; line-height: 3.5rem; margin-bottom: 2.625rem; margin-top: 0\">"));
        assert!(!html.contains("<h3"));
    }

    #[test]
    fn test_other_paths_use_small_link() {
        let config = test_support::config();
        for path in ["/about", "/about/", "/hello-world/", ""] {
            let html = render(path, &config);
            assert!(html.contains("<h3 style=\"font-family: Nunito, sans-serif; margin-top: 0\">"));
            assert!(html.contains("color: #d23669\" href=\"/\">Sam Eshun</a></h3>"));
            assert!(!html.contains("<h1"));
        }
    }

    #[test]
    fn test_root_follows_base_path() {
        let mut config = test_support::config();
        config.site.base_path = "/blog".to_string();

        assert!(render("/blog/", &config).contains("<h1 "));
        assert!(render("/", &config).contains("<h3 "));
    }

    #[test]
    fn test_section_order() {
        let config = test_support::config();
        let html = render("/", &config);

        let nav = html.find("<nav>").expect("nav");
        let header = html.find("<header>").expect("header");
        let main = html.find("<main><p>body</p></main>").expect("main");
        let footer = html.find("<footer").expect("footer");
        assert!(nav < header && header < main && main < footer);
    }

    #[test]
    fn test_container_spacing() {
        let config = test_support::config();
        let html = render("/", &config);
        assert!(html.starts_with(
            "<div style=\"margin-left: auto; margin-right: auto; max-width: 42rem; padding: 2.625rem 1.3125rem\">"
        ));
    }

    #[test]
    fn test_empty_menu_renders_empty_list() {
        let config = test_support::config();
        let typography = test_support::typography();
        let ctx = RenderContext::with_year(&config, &typography, 2026);
        let html = render_layout(
            &ctx,
            &LayoutProps {
                pathname: "/",
                title: "T",
                menu_links: Some(&[]),
                content: "",
            },
        );
        assert!(html.contains("<nav><ul style=\"display: flex; flex: 1; list-style: none\"></ul></nav>"));
    }
}
