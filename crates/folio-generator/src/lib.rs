//! folio generator library
//!
//! Page components and the site build engine.
//!
//! # Modules
//!
//! - [`template`] - HTML document template with variable interpolation
//! - [`components`] - layout shell, header navigation and footer
//! - [`pages`] - home, about and post pages
//! - [`collector`] - content collection and ordering
//! - [`assets`] - static asset copying
//! - [`build`] - build orchestration

pub mod assets;
pub mod build;
pub mod collector;
pub mod components;
pub mod pages;
pub mod template;

pub use assets::copy_assets;
pub use build::{BuildError, BuildStats, Builder};
pub use collector::{ContentCollector, SiteContent, sort_posts};
pub use components::{LayoutProps, RenderContext, render_footer, render_layout, render_nav};
pub use pages::{AboutData, HomeData, PageError, PageRenderer};
pub use template::{Template, TemplateContext};
