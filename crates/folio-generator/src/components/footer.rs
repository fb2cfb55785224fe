//! Site footer.

use chrono::{Datelike, Local};
use folio_theme::{Style, Typography};

use super::escape_html;

/// A footer link that opens in a new tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutboundLink {
    /// Link text.
    pub label: &'static str,
    /// Target URL.
    pub href: &'static str,
}

/// The footer links, in display order.
pub const FOOTER_LINKS: [OutboundLink; 5] = [
    OutboundLink {
        label: "twitter",
        href: "https://mobile.twitter.com/samxeshun",
    },
    OutboundLink {
        label: "github",
        href: "https://github.com/kwakueshun",
    },
    OutboundLink {
        label: "email",
        href: "mailto:samuel.eshun13@gmail.com",
    },
    OutboundLink {
        label: "linkedin",
        href: "https://www.linkedin.com/in/samuel-eshun-84186075/",
    },
    OutboundLink {
        label: "samueleshun.com",
        href: "https://samueleshun.com/",
    },
];

/// The current calendar year in local time.
#[must_use]
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Render the footer for `year`.
#[must_use]
pub fn render_footer(typography: &Typography, year: i32) -> String {
    let style = Style::new()
        .with("margin-top", typography.rhythm(2.5))
        .with("padding-top", typography.rhythm(1.0));

    let links = FOOTER_LINKS
        .iter()
        .map(|link| {
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape_html(link.href),
                escape_html(link.label),
            )
        })
        .collect::<Vec<_>>()
        .join(" &bull; ");

    format!(
        "<footer style=\"{}\">&copy; {year} &bull; {links}</footer>",
        style.to_inline()
    )
}
