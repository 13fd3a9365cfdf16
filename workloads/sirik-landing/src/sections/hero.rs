//! Hero banner section.

use super::html_escape;
use crate::data::HeroContent;

/// Render the hero banner section.
pub fn render_hero(content: &HeroContent) -> String {
    let poster = content
        .poster_image
        .as_ref()
        .map(|url| format!(r#" style="background-image: url('{}')""#, html_escape(url)))
        .unwrap_or_default();

    let headline = content
        .headline
        .iter()
        .map(|line| html_escape(line))
        .collect::<Vec<_>>()
        .join("<br>");

    format!(
        r##"<section id="home" class="hero" data-section="hero"{}>
    <div class="hero-content">
        <h1 class="hero-headline">{}</h1>
        <p class="hero-subheadline">{}</p>
        <a href="#{}" class="hero-cta">{}</a>
        <a href="#{}" class="hero-cta-secondary">{}</a>
    </div>
</section>"##,
        poster,
        headline,
        html_escape(&content.subheadline),
        html_escape(&content.primary_cta.anchor),
        html_escape(&content.primary_cta.label),
        html_escape(&content.secondary_cta.anchor),
        html_escape(&content.secondary_cta.label)
    )
}
