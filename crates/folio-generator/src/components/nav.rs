//! Header navigation.

use folio_core::NavigationLink;
use folio_theme::Style;

use super::{RenderContext, escape_html};

/// Render the header navigation.
///
/// One list item per link, in the order given. Duplicates are kept, and a
/// missing or empty list renders an empty `<ul>`.
#[must_use]
pub fn render_nav(ctx: &RenderContext<'_>, menu_links: Option<&[NavigationLink]>) -> String {
    let list_style = Style::new()
        .with("display", "flex")
        .with("flex", 1)
        .with("list-style", "none");
    let item_style = Style::new()
        .with("margin", "10px")
        .with("font-family", "novabold, sans-serif")
        .with("font-weight", "bold")
        .with("font-size", "1.2rem");
    let link_style = Style::new().with("text-decoration", "none !important");

    let items: String = menu_links
        .unwrap_or_default()
        .iter()
        .map(|link| {
            format!(
                "<li style=\"{}\"><a href=\"{}\" style=\"{}\">{}</a></li>",
                item_style.to_inline(),
                escape_html(&ctx.href(&link.link)),
                link_style.to_inline(),
                escape_html(&link.name),
            )
        })
        .collect();

    format!(
        "<nav><ul style=\"{}\">{items}</ul></nav>",
        list_style.to_inline()
    )
}
