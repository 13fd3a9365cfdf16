//! Brand and founder story.

use super::html_escape;
use crate::data::{AboutContent, StoryBlock};

pub fn render_about(content: &AboutContent) -> String {
    format!(
        r#"<section id="about" class="about" data-section="about">
    <div class="section-header"><h2>{}</h2></div>
    {}
    {}
</section>"#,
        html_escape(&content.section_title),
        render_story(&content.brand, "brand-story"),
        render_story(&content.founder, "founder-story")
    )
}

fn render_story(block: &StoryBlock, class: &str) -> String {
    let paragraphs: String = block
        .paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", html_escape(p)))
        .collect();

    format!(
        r#"<div class="{}">
        <img src="{}" alt="{}">
        <div>
            <h3>{}</h3>
            {}
            <p class="highlight">{}</p>
        </div>
    </div>"#,
        class,
        html_escape(&block.image),
        html_escape(&block.image_alt),
        html_escape(&block.title),
        paragraphs,
        html_escape(&block.highlight)
    )
}
