//! Base typography themes.

use crate::{
    error::{Result, ThemeError},
    rhythm::Rhythm,
    style::{Style, StyleRules},
};

/// Produces a theme's own rule table once its rhythm is known.
pub type ThemeRules = fn(&Theme, &Rhythm) -> StyleRules;

/// Names of the built-in presets.
pub const PRESETS: &[&str] = &["default", "wordpress-2016"];

/// Selectors that share the block bottom margin.
const BLOCK_ELEMENTS: &str = "hgroup,ul,ol,dl,dd,p,figure,pre,table,fieldset,blockquote,form,noscript,iframe,img,hr,address";

/// Selector covering every heading level.
pub const HEADINGS: &str = "h1,h2,h3,h4,h5,h6";

/// A base typography theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Preset name.
    pub name: String,
    /// Root font size in px.
    pub base_font_size: f64,
    /// Unitless body line height.
    pub base_line_height: f64,
    /// Ratio between consecutive steps of the modular scale.
    pub scale_ratio: f64,
    /// Smallest gap in px kept above and below scaled text.
    pub min_line_padding: f64,
    /// Snap scaled line heights to half lines instead of whole lines.
    pub round_to_nearest_half_line: bool,
    /// Unitless heading line height.
    pub header_line_height: f64,
    /// Heading font stack.
    pub header_font_family: Vec<String>,
    /// Body font stack.
    pub body_font_family: Vec<String>,
    /// Heading colour.
    pub header_color: String,
    /// Body colour.
    pub body_color: String,
    /// Heading weight.
    pub header_weight: u16,
    /// Body weight.
    pub body_weight: u16,
    /// Weight of `b`, `strong`, `dt` and `th`.
    pub bold_weight: u16,
    /// Rules the theme layers on top of the generated base styles.
    pub rules: Option<ThemeRules>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            base_font_size: 16.0,
            base_line_height: 1.45,
            scale_ratio: 2.0,
            min_line_padding: 2.0,
            round_to_nearest_half_line: true,
            header_line_height: 1.1,
            header_font_family: font_stack(&[
                "-apple-system",
                "BlinkMacSystemFont",
                "Segoe UI",
                "Roboto",
                "Oxygen",
                "Ubuntu",
                "Cantarell",
                "Fira Sans",
                "Droid Sans",
                "Helvetica Neue",
                "sans-serif",
            ]),
            body_font_family: font_stack(&["georgia", "serif"]),
            header_color: "inherit".to_string(),
            body_color: "hsla(0,0%,0%,0.8)".to_string(),
            header_weight: 700,
            body_weight: 400,
            bold_weight: 700,
            rules: None,
        }
    }
}

impl Theme {
    /// Look up a preset by name.
    pub fn preset(name: &str) -> Result<Self> {
        match name {
            "default" => Ok(Self::default()),
            "wordpress-2016" => Ok(Self::wordpress_2016()),
            _ => Err(ThemeError::UnknownPreset {
                name: name.to_string(),
                available: PRESETS.join(", "),
            }),
        }
    }

    /// Merriweather body, Montserrat titles, 1.75 line height.
    #[must_use]
    pub fn wordpress_2016() -> Self {
        Self {
            name: "wordpress-2016".to_string(),
            base_font_size: 16.0,
            base_line_height: 1.75,
            scale_ratio: 5.0 / 2.0,
            header_font_family: font_stack(&["Merriweather", "Georgia", "serif"]),
            body_font_family: font_stack(&["Merriweather", "Georgia", "serif"]),
            body_color: "hsla(0,0%,0%,0.9)".to_string(),
            header_weight: 900,
            body_weight: 400,
            bold_weight: 700,
            rules: Some(wordpress_2016_rules),
            ..Self::default()
        }
    }

    /// Rhythm metrics for this theme.
    #[must_use]
    pub fn rhythm(&self) -> Rhythm {
        Rhythm::new(
            self.base_font_size,
            self.base_line_height,
            self.scale_ratio,
            self.min_line_padding,
            self.round_to_nearest_half_line,
        )
    }

    /// The base stylesheet every theme starts from, followed by the theme's
    /// own rules.
    #[must_use]
    pub fn base_rules(&self, rhythm: &Rhythm) -> StyleRules {
        let one = rhythm.rhythm(1.0);
        let half = rhythm.rhythm(0.5);

        let mut rules = StyleRules::new()
            .rule(
                "html",
                Style::new()
                    .with(
                        "font",
                        format!(
                            "{}%/{} {}",
                            self.base_font_size / 16.0 * 100.0,
                            self.base_line_height,
                            css_font_family(&self.body_font_family)
                        ),
                    )
                    .with("box-sizing", "border-box")
                    .with("overflow-y", "scroll"),
            )
            .rule(
                "*,*:before,*:after",
                Style::new().with("box-sizing", "inherit"),
            )
            .rule(
                "body",
                Style::new()
                    .with("color", &self.body_color)
                    .with("font-family", css_font_family(&self.body_font_family))
                    .with("font-weight", self.body_weight)
                    .with("word-wrap", "break-word")
                    .with("font-kerning", "normal")
                    .with("font-feature-settings", "\"kern\", \"liga\", \"clig\", \"calt\""),
            )
            .rule("img", Style::new().with("max-width", "100%"))
            .rule(
                BLOCK_ELEMENTS,
                Style::new()
                    .with("margin", format!("0 0 {one}"))
                    .with("padding", 0),
            )
            .rule(
                HEADINGS,
                Style::new()
                    .with("margin", format!("0 0 {one}"))
                    .with("padding", 0)
                    .with("color", &self.header_color)
                    .with("font-family", css_font_family(&self.header_font_family))
                    .with("font-weight", self.header_weight)
                    .with("text-rendering", "optimizeLegibility")
                    .with("line-height", self.header_line_height),
            );

        for (selector, step) in [
            ("h1", 5.0 / 5.0),
            ("h2", 3.0 / 5.0),
            ("h3", 2.0 / 5.0),
            ("h4", 0.0),
            ("h5", -1.0 / 5.0),
            ("h6", -1.5 / 5.0),
        ] {
            rules.insert(
                selector,
                Style::new().with("font-size", rhythm.scale(step).font_size),
            );
        }

        rules = rules
            .rule(
                "ul,ol",
                Style::new()
                    .with("margin-left", one)
                    .with("list-style-position", "outside")
                    .with("list-style-image", "none"),
            )
            .rule("li", Style::new().with("margin-bottom", half))
            .rule(
                "blockquote",
                Style::new()
                    .with("margin-left", one)
                    .with("margin-right", one),
            )
            .rule(
                "b,strong,dt,th",
                Style::new().with("font-weight", self.bold_weight),
            )
            .rule(
                "hr",
                Style::new()
                    .with("background", "hsla(0,0%,0%,0.2)")
                    .with("border", "none")
                    .with("height", "1px")
                    .with("margin-bottom", format!("calc({one} - 1px)")),
            )
            .rule(
                "code,kbd,pre,samp",
                Style::new().with("font-size", "85%").with("line-height", 1.45),
            )
            .rule(
                "table",
                Style::new()
                    .with("font-size", "1rem")
                    .with("line-height", one)
                    .with("border-collapse", "collapse")
                    .with("width", "100%"),
            );

        if let Some(theme_rules) = self.rules {
            rules.merge(theme_rules(self, rhythm));
        }

        rules
    }
}

fn wordpress_2016_rules(theme: &Theme, rhythm: &Rhythm) -> StyleRules {
    let link_blue = "#007acc";

    StyleRules::new()
        .rule(
            "h1",
            Style::new().with("font-family", "Montserrat,sans-serif"),
        )
        .rule(
            "blockquote",
            rhythm
                .scale(1.0 / 5.0)
                .to_style()
                .with("color", gray(41))
                .with("font-style", "italic")
                .with("padding-left", rhythm.rhythm(13.0 / 16.0))
                .with("margin-left", rhythm.rhythm(-1.0))
                .with(
                    "border-left",
                    format!("{} solid {}", rhythm.rhythm(3.0 / 16.0), gray(10)),
                ),
        )
        .rule(
            "blockquote > :last-child",
            Style::new().with("margin-bottom", 0),
        )
        .rule(
            "blockquote cite",
            rhythm
                .adjust_font_size_to(theme.base_font_size)
                .to_style()
                .with("color", &theme.body_color)
                .with("font-weight", theme.body_weight),
        )
        .rule(
            "blockquote cite:before",
            Style::new().with("content", "\"— \""),
        )
        .rule("ul,ol", Style::new().with("margin-left", 0))
        .rule(HEADINGS, Style::new().with("margin-top", rhythm.rhythm(2.0)))
        .rule(
            "h4",
            Style::new()
                .with("letter-spacing", "0.140625em")
                .with("text-transform", "uppercase"),
        )
        .rule("h6", Style::new().with("font-style", "italic"))
        .rule(
            "a",
            Style::new()
                .with("box-shadow", "0 1px 0 0 currentColor")
                .with("color", link_blue)
                .with("text-decoration", "none"),
        )
        .rule("a:hover,a:active", Style::new().with("box-shadow", "none"))
        .rule(
            "mark,ins",
            Style::new()
                .with("background", link_blue)
                .with("color", "white")
                .with(
                    "padding",
                    format!("{} {}", rhythm.rhythm(1.0 / 16.0), rhythm.rhythm(1.0 / 8.0)),
                )
                .with("text-decoration", "none"),
        )
}

/// A grey `darkness` percent darker than white.
fn gray(darkness: u8) -> String {
    format!("hsla(0,0%,{}%,1)", 100 - u16::from(darkness.min(100)))
}

fn font_stack(fonts: &[&str]) -> Vec<String> {
    fonts.iter().map(|f| (*f).to_string()).collect()
}

/// Join a font stack, quoting family names that contain spaces.
pub fn css_font_family(fonts: &[String]) -> String {
    fonts
        .iter()
        .map(|font| {
            if font.contains(' ') {
                format!("'{font}'")
            } else {
                font.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
