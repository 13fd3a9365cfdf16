//! Contact form and channels.

use super::html_escape;
use crate::data::ContactContent;

pub fn render_contact(content: &ContactContent) -> String {
    let options: String = content
        .inquiry_types
        .iter()
        .map(|t| {
            format!(
                r#"<option value="{}">{}</option>"#,
                html_escape(&t.to_lowercase()),
                html_escape(t)
            )
        })
        .collect();

    let channels: String = content
        .channels
        .iter()
        .map(|c| {
            let value = match &c.href {
                Some(href) => format!(r#"<a href="{}">{}</a>"#, html_escape(href), html_escape(&c.value)),
                None => format!("<span>{}</span>", html_escape(&c.value)),
            };
            format!(
                r#"<div class="contact-channel">
            <h4>{}</h4>
            <p>{}</p>
            {}
        </div>"#,
                html_escape(&c.label),
                html_escape(&c.note),
                value
            )
        })
        .collect();

    format!(
        r#"<section id="contact" class="contact" data-section="contact">
    <div class="section-header">
        <h2>{}</h2>
        <p>{}</p>
    </div>
    <form class="contact-form">
        <label for="contact-name">Name</label>
        <input type="text" id="contact-name" placeholder="Your name">
        <label for="contact-email">Email</label>
        <input type="email" id="contact-email" placeholder="your.email@example.com">
        <label for="contact-inquiry">Inquiry Type</label>
        <select id="contact-inquiry">
            <option value="">Select an option</option>
            {}
        </select>
        <label for="contact-message">Message</label>
        <textarea id="contact-message" rows="5" placeholder="Your message here..."></textarea>
        <button type="submit">Send Message</button>
    </form>
    <div class="contact-channels">
        {}
    </div>
</section>"#,
        html_escape(&content.section_title),
        html_escape(&content.section_subtitle),
        options,
        channels
    )
}
