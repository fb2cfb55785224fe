//! Markdown parser using pulldown-cmark.

use std::path::Path;

use folio_core::{ParsedContent, frontmatter::parse_frontmatter};
use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};
use thiserror::Error;

use crate::syntax::{SyntaxHighlighter, html_escape};

/// Markdown parsing errors.
#[derive(Debug, Error)]
pub enum MarkdownError {
    /// Failed to parse frontmatter.
    #[error("frontmatter error: {0}")]
    Frontmatter(#[from] folio_core::CoreError),
}

/// Result type for markdown operations.
pub type Result<T> = std::result::Result<T, MarkdownError>;

/// Markdown parser with syntax highlighting and heading anchors.
#[derive(Debug)]
pub struct MarkdownParser {
    highlighter: SyntaxHighlighter,
    options: Options,
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

/// A heading being collected: level, explicit id, inner events, plain text.
type OpenHeading<'a> = (HeadingLevel, Option<CowStr<'a>>, Vec<Event<'a>>, String);

impl MarkdownParser {
    /// Create a new markdown parser with default options.
    pub fn new() -> Self {
        Self::with_highlighter(SyntaxHighlighter::default())
    }

    /// Create a parser with a custom syntax theme.
    pub fn with_theme(theme: &str) -> Self {
        Self::with_highlighter(SyntaxHighlighter::new(theme))
    }

    fn with_highlighter(highlighter: SyntaxHighlighter) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

        Self {
            highlighter,
            options,
        }
    }

    /// Parse markdown content with frontmatter.
    pub fn parse(&self, content: &str, path: &Path) -> Result<ParsedContent> {
        let (frontmatter, body) = parse_frontmatter(content, path)?;
        let html = self.render(&body);

        Ok(ParsedContent {
            frontmatter,
            html,
            raw: body,
        })
    }

    /// Render a markdown body to HTML.
    pub fn render(&self, body: &str) -> String {
        let mut events: Vec<Event<'_>> = Vec::new();
        let mut code_block: Option<(Option<String>, String)> = None;
        let mut heading: Option<OpenHeading<'_>> = None;

        for event in Parser::new_ext(body, self.options) {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) => {
                            let lang = lang.split_whitespace().next().unwrap_or("").to_string();
                            if lang.is_empty() { None } else { Some(lang) }
                        }
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some((lang, String::new()));
                }

                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = code_block.take() {
                        let highlighted = self.highlighter.highlight(&code, lang.as_deref());
                        events.push(Event::Html(CowStr::from(highlighted)));
                    }
                }

                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, code)) = code_block.as_mut() {
                        code.push_str(&text);
                    }
                }

                Event::Start(Tag::Heading { level, id, .. }) => {
                    heading = Some((level, id, Vec::new(), String::new()));
                }

                Event::End(TagEnd::Heading(_)) => {
                    if let Some(open) = heading.take() {
                        events.push(Event::Html(CowStr::from(render_heading(open))));
                    }
                }

                other => match heading.as_mut() {
                    Some((_, _, inner, text)) => {
                        if let Event::Text(t) | Event::Code(t) = &other {
                            text.push_str(t);
                        }
                        inner.push(other);
                    }
                    None => events.push(other),
                },
            }
        }

        let mut out = String::new();
        html::push_html(&mut out, events.into_iter());
        out
    }
}

/// Render a heading with an id and a hover anchor linking to it.
fn render_heading((level, id, inner, text): OpenHeading<'_>) -> String {
    let lvl = level as u8;
    let id = id
        .map(|i| i.to_string())
        .unwrap_or_else(|| slugify(&text));

    let mut inner_html = String::new();
    html::push_html(&mut inner_html, inner.into_iter());

    if id.is_empty() {
        return format!("<h{lvl}>{inner_html}</h{lvl}>\n");
    }

    let id = html_escape(&id);
    format!(
        "<h{lvl} id=\"{id}\"><a href=\"#{id}\" aria-label=\"{id} permalink\" class=\"anchor\"></a>{inner_html}</h{lvl}>\n"
    )
}

/// Convert text to a URL-safe slug.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_markdown() {
        let parser = MarkdownParser::new();
        let content = r#"---
title: "Test Post"
---

# Hello World

This is a test."#;

        let result = parser.parse(content, Path::new("test.md")).unwrap();

        assert_eq!(result.frontmatter.title, "Test Post");
        assert!(result.html.contains("<h1 id=\"hello-world\">"));
        assert!(result.html.contains("class=\"anchor\""));
        assert!(result.html.contains("<p>This is a test.</p>"));
        assert!(result.raw.starts_with("# Hello World"));
    }

    #[test]
    fn test_heading_keeps_inline_markup() {
        let parser = MarkdownParser::new();
        let html = parser.render("## Using `select` *well*");

        assert!(html.contains("<h2 id=\"using-select-well\">"));
        assert!(html.contains("<code>select</code>"));
        assert!(html.contains("<em>well</em>"));
    }

    #[test]
    fn test_explicit_heading_id() {
        let parser = MarkdownParser::new();
        let html = parser.render("## Channels {#chan}");
        assert!(html.contains("<h2 id=\"chan\">"));
    }

    #[test]
    fn test_parse_code_block() {
        let parser = MarkdownParser::new();
        let html = parser.render(
            r#"```rust
fn main() {
    println!("Hello");
}
```"#,
        );

        assert!(html.contains("<pre"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_unknown_code_language_is_escaped() {
        let parser = MarkdownParser::new();
        let html = parser.render("```nosuchlang\n<b>x</b>\n```");
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Test 123 Post"), "test-123-post");
        assert_eq!(slugify("Multiple   Spaces"), "multiple-spaces");
        assert_eq!(slugify("Special!@#Chars"), "specialchars");
    }

    #[test]
    fn test_table_rendering() {
        let parser = MarkdownParser::new();
        let html = parser.render(
            r#"| Header 1 | Header 2 |
|----------|----------|
| Cell 1   | Cell 2   |"#,
        );

        assert!(html.contains("<table>"));
        assert!(html.contains("<thead>"));
        assert!(html.contains("<td>"));
    }

    #[test]
    fn test_inline_html_passes_through() {
        let parser = MarkdownParser::new();
        let html = parser.render("Hi <span role=\"img\">👋🏻</span>");
        assert!(html.contains("<span role=\"img\">👋🏻</span>"));
    }

    #[test]
    fn test_no_frontmatter() {
        let parser = MarkdownParser::new();
        let content = "# Just Content\n\nNo frontmatter here.";
        let result = parser.parse(content, Path::new("test.md")).unwrap();

        assert!(result.frontmatter.title.is_empty());
        assert!(result.html.contains("Just Content"));
    }

    #[test]
    fn test_bad_frontmatter_is_error() {
        let parser = MarkdownParser::new();
        let result = parser.parse("---\ntitle: [unclosed\n---\nbody", Path::new("bad.md"));
        assert!(matches!(result, Err(MarkdownError::Frontmatter(_))));
    }
}
