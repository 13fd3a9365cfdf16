//! Brand values grid.

use super::html_escape;
use crate::data::ValuesContent;

pub fn render_values(content: &ValuesContent) -> String {
    let cards: String = content
        .values
        .iter()
        .map(|v| {
            format!(
                r#"<div class="value-card">
            <span class="value-icon" data-icon="{}"></span>
            <h3>{}</h3>
            <p>{}</p>
        </div>"#,
                html_escape(&v.icon),
                html_escape(&v.title),
                html_escape(&v.description)
            )
        })
        .collect();

    format!(
        r#"<section id="values" class="values" data-section="values">
    <div class="section-header">
        <h2>{}</h2>
        <p>{}</p>
    </div>
    <div class="values-grid">
        {}
    </div>
</section>"#,
        html_escape(&content.section_title),
        html_escape(&content.section_subtitle),
        cards
    )
}
