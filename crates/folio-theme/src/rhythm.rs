//! Vertical rhythm and modular scale.
//!
//! All spacing on the site is a multiple of one rhythm unit: the base line
//! height expressed in `rem`. Font sizes step geometrically by the theme's
//! scale ratio, and each scaled size gets a line height snapped to the rhythm.

use crate::{length::Length, style::Style};

/// A font size with a rhythm-aligned line height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledFont {
    /// Font size.
    pub font_size: Length,
    /// Line height, a whole or half multiple of the rhythm unit.
    pub line_height: Length,
}

impl ScaledFont {
    /// The pair as `font-size` / `line-height` declarations.
    #[must_use]
    pub fn to_style(&self) -> Style {
        Style::new()
            .with("font-size", self.font_size)
            .with("line-height", self.line_height)
    }
}

/// Rhythm metrics derived from a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rhythm {
    base_font_size: f64,
    base_line_height: f64,
    scale_ratio: f64,
    min_line_padding: f64,
    round_to_nearest_half_line: bool,
}

impl Rhythm {
    /// Create rhythm metrics. Sizes are in px; the line height is unitless.
    #[must_use]
    pub fn new(
        base_font_size: f64,
        base_line_height: f64,
        scale_ratio: f64,
        min_line_padding: f64,
        round_to_nearest_half_line: bool,
    ) -> Self {
        Self {
            base_font_size,
            base_line_height,
            scale_ratio,
            min_line_padding,
            round_to_nearest_half_line,
        }
    }

    /// Base font size in px.
    #[must_use]
    pub fn base_font_size(&self) -> f64 {
        self.base_font_size
    }

    /// Base line height in px.
    #[must_use]
    pub fn base_line_height_px(&self) -> f64 {
        self.base_font_size * self.base_line_height
    }

    /// One rhythm unit.
    #[must_use]
    pub fn unit(&self) -> Length {
        Length::rem(self.base_line_height_px() / self.base_font_size)
    }

    /// `multiple` rhythm units.
    #[must_use]
    pub fn rhythm(&self, multiple: f64) -> Length {
        self.unit() * multiple
    }

    /// Font size stepped `multiple` times along the modular scale, with a
    /// matching line height.
    #[must_use]
    pub fn scale(&self, multiple: f64) -> ScaledFont {
        let size_px = self.scale_ratio.powf(multiple) * self.base_font_size;
        self.adjust_font_size_to(size_px)
    }

    /// Font size for an arbitrary px size, with a matching line height.
    #[must_use]
    pub fn adjust_font_size_to(&self, size_px: f64) -> ScaledFont {
        ScaledFont {
            font_size: Length::rem(size_px / self.base_font_size),
            line_height: self.rhythm(self.lines_for_font_size(size_px)),
        }
    }

    /// Number of rhythm lines a font size needs, leaving at least
    /// `min_line_padding` px above and below the glyphs.
    #[must_use]
    pub fn lines_for_font_size(&self, size_px: f64) -> f64 {
        let line_px = self.base_line_height_px();
        let mut lines = if self.round_to_nearest_half_line {
            (2.0 * size_px / line_px).ceil() / 2.0
        } else {
            (size_px / line_px).ceil()
        };

        if lines * line_px - size_px < self.min_line_padding * 2.0 {
            lines += if self.round_to_nearest_half_line {
                0.5
            } else {
                1.0
            };
        }

        lines
    }
}
