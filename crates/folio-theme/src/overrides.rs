//! The site's override table, merged over the base theme.

use crate::style::{Style, StyleRules};

/// Accent colour for links and small titles.
pub const ACCENT: &str = "#d23669";

const ALEGREYA_BODY: &str =
    "'Alegreya Sans', Enriqueta, Nunito, Montserrat, Helvetica, 'Times New Roman', sans-serif !important";
const CODE_FONTS: &str = "Inconsolata, 'Courier New', Menlo, 'SF Mono', Consolas, Monaco, source-code-pro, monospace !important";

/// The override table.
#[must_use]
pub fn site_overrides() -> StyleRules {
    StyleRules::new()
        .rule("a", Style::new().with("color", ACCENT))
        .rule("hr", Style::new().with("background", "hsla(0, 0%, 0%, 0.2)"))
        .rule("a.gatsby-resp-image-link", Style::new().with("box-shadow", "none"))
        // autolinked heading anchors
        .rule("a.anchor", Style::new().with("box-shadow", "none"))
        .rule(
            "a.anchor svg[aria-hidden=\"true\"]",
            Style::new().with("stroke", ACCENT),
        )
        .rule("p code", Style::new().with("font-size", "1rem"))
        .rule(
            "h1 code, h2 code, h3 code, h4 code, h5 code, h6 code",
            Style::new().with("font-size", "inherit"),
        )
        .rule("li code", Style::new().with("font-size", "1rem"))
        .rule(
            "blockquote",
            Style::new()
                .with("color", "inherit")
                .with("border-left-color", "inherit")
                .with("opacity", "0.8")
                .with("font-size", "1rem"),
        )
        .rule("blockquote.translation", Style::new().with("font-size", "1em"))
        .rule(
            "body h1",
            Style::new().with(
                "font-family",
                "'Alegreya Sans', Nunito, Enriqueta, sans-serif !important",
            ),
        )
        .rule(
            "body p, dd, dt, li",
            Style::new()
                .with("font-size", "1.1rem")
                .with("font-family", ALEGREYA_BODY),
        )
        .rule(
            "body h3, small, footer, blockquote",
            Style::new().with(
                "font-family",
                "'Alegreya Sans', Enriqueta, Nunito, Montserrat, Helvetica, serif",
            ),
        )
        .rule(
            "code[class*='language-'], pre[class*='language-']",
            Style::new()
                .with("font-size", "0.9em !important")
                .with("font-family", CODE_FONTS),
        )
        .rule(
            ":not(pre) > code[class*='language-']",
            Style::new()
                .with("background", "none !important")
                .with("font-style", "italic !important")
                .with("font-size", "0.7em !important"),
        )
        .rule(
            ".about-content, .about-content p, .about-content h4",
            Style::new().with(
                "font-family",
                "'Alegreya Sans', Nunito, Montserrat, Helvetica, 'Times New Roman', sans-serif !important",
            ),
        )
        .rule(
            ".about-content p",
            Style::new()
                .with("display", "block")
                .with("margin-top", "1em")
                .with("margin-bottom", "1em")
                .with("margin-left", "0")
                .with("margin-right", "0"),
        )
        .rule(
            ".about-content h4",
            Style::new()
                .with("color", ACCENT)
                .with("text-transform", "uppercase"),
        )
}
