//! folio theme library
//!
//! Typography for the site: a base theme, the site's selector override table,
//! and the [`Typography`] facade exposing `rhythm` and `scale` to components.
//!
//! # Modules
//!
//! - [`length`] - `rem` lengths with linear arithmetic
//! - [`style`] - declaration blocks and selector tables with override merging
//! - [`rhythm`] - vertical rhythm and modular scale maths
//! - [`theme`] - base theme presets
//! - [`overrides`] - the site's override table
//! - [`typography`] - the merged, immutable typography value

pub mod error;
pub mod length;
pub mod overrides;
pub mod rhythm;
pub mod style;
pub mod theme;
pub mod typography;

pub use error::{Result, ThemeError};
pub use length::Length;
pub use overrides::site_overrides;
pub use rhythm::{Rhythm, ScaledFont};
pub use style::{Style, StyleRules};
pub use theme::Theme;
pub use typography::Typography;
