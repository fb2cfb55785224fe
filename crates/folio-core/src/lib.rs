//! folio core library
//!
//! Configuration, content model, frontmatter and error handling shared by the
//! rest of the folio workspace.

pub mod config;
pub mod content;
pub mod error;
pub mod frontmatter;

pub use config::{BuildConfig, Config, Environment, NavigationLink, SiteConfig, ThemeConfig};
pub use content::{ContentItem, ParsedContent, ReadingTime};
pub use error::{CoreError, Result};
pub use frontmatter::Frontmatter;
