//! Site header with navigation and cart badge.

use super::html_escape;
use crate::data::HeaderContent;

/// Render the header. `item_count` drives the cart badge.
pub fn render_header(content: &HeaderContent, item_count: u32) -> String {
    let links: String = content
        .links
        .iter()
        .map(|link| {
            format!(
                r##"<a href="#{}">{}</a>"##,
                html_escape(&link.anchor),
                html_escape(&link.label)
            )
        })
        .collect();

    let badge = if item_count > 0 {
        format!(r#"<span class="cart-badge">{}</span>"#, item_count)
    } else {
        String::new()
    };

    format!(
        r##"<header class="site-header" data-section="header">
    <nav class="nav-container">
        <a href="#home" class="logo">{}</a>
        <div class="nav-links">{}</div>
        <a href="#{}" class="btn-primary">{}</a>
        <button class="cart-toggle" aria-label="Open cart">Cart{}</button>
    </nav>
</header>"##,
        html_escape(&content.brand),
        links,
        html_escape(&content.cta_anchor),
        html_escape(&content.cta_text),
        badge
    )
}
