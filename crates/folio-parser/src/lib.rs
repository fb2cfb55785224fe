//! folio parser library
//!
//! Turns markdown posts into HTML, highlighting fenced code with syntect.

pub mod markdown;
pub mod syntax;

pub use markdown::{MarkdownError, MarkdownParser, slugify};
pub use syntax::SyntaxHighlighter;
