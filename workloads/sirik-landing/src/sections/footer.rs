//! Site footer.

use super::html_escape;
use crate::data::FooterContent;

/// Render the footer with the copyright notice for `year`.
pub fn render_footer(content: &FooterContent, year: i32) -> String {
    let links: String = content
        .quick_links
        .iter()
        .map(|link| {
            format!(
                r##"<li><a href="#{}">{}</a></li>"##,
                html_escape(&link.anchor),
                html_escape(&link.label)
            )
        })
        .collect();

    format!(
        r#"<footer class="site-footer" data-section="footer">
    <div class="footer-container">
        <div class="footer-brand"><p>{}</p></div>
        <div class="footer-column">
            <h4>Quick Links</h4>
            <ul>{}</ul>
        </div>
        <div class="footer-column">
            <h4>Newsletter</h4>
            <p>{}</p>
        </div>
    </div>
    <div class="footer-bottom">
        <p>&copy; {} {}. All rights reserved.</p>
        <p>Made with love in {}</p>
    </div>
</footer>"#,
        html_escape(&content.blurb),
        links,
        html_escape(&content.newsletter_note),
        year,
        html_escape(&content.copyright_holder),
        html_escape(&content.made_in)
    )
}
