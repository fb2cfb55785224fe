//! The typography facade handed to every component.

use std::sync::OnceLock;

use tracing::debug;

use crate::{
    error::Result,
    length::Length,
    rhythm::{Rhythm, ScaledFont},
    style::StyleRules,
    theme::Theme,
};

/// Immutable typography: a base theme with the override table merged in.
///
/// Built once per process and passed by reference. `rhythm` and `scale` are
/// pure; `css` renders the merged stylesheet on first use and returns the
/// same text afterwards.
#[derive(Debug)]
pub struct Typography {
    theme: Theme,
    rhythm: Rhythm,
    rules: StyleRules,
    css: OnceLock<String>,
}

impl Typography {
    /// Merge `overrides` over `theme`. Later tables win property by property.
    #[must_use]
    pub fn new(theme: Theme, overrides: StyleRules) -> Self {
        let rhythm = theme.rhythm();
        let mut rules = theme.base_rules(&rhythm);
        rules.merge(overrides);

        debug!(theme = %theme.name, selectors = rules.len(), "typography ready");

        Self {
            theme,
            rhythm,
            rules,
            css: OnceLock::new(),
        }
    }

    /// Build from a named preset.
    pub fn from_preset(name: &str, overrides: StyleRules) -> Result<Self> {
        Ok(Self::new(Theme::preset(name)?, overrides))
    }

    /// `multiple` rhythm units.
    #[must_use]
    pub fn rhythm(&self, multiple: f64) -> Length {
        self.rhythm.rhythm(multiple)
    }

    /// Font size `multiple` steps along the modular scale, with its line height.
    #[must_use]
    pub fn scale(&self, multiple: f64) -> ScaledFont {
        self.rhythm.scale(multiple)
    }

    /// The base theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The merged rule table.
    #[must_use]
    pub fn rules(&self) -> &StyleRules {
        &self.rules
    }

    /// The merged stylesheet.
    pub fn css(&self) -> &str {
        self.css.get_or_init(|| {
            debug!("rendering typography stylesheet");
            self.rules.to_css()
        })
    }

    /// The stylesheet wrapped for inline injection into a page head.
    #[must_use]
    pub fn style_element(&self) -> String {
        format!("<style id=\"typography\">\n{}</style>", self.css())
    }
}
