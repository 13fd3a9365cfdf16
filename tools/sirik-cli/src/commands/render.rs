//! Render the landing page to HTML.

use std::fs;

use anyhow::{Context as _, Result};
use sirik_commerce::prelude::*;
use sirik_landing::{render_page, SiteContent};
use tracing::info;

use super::{add_items, RenderArgs};
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let content_path = args.content.as_ref().or(ctx.config.render.content.as_ref());
    let content = match content_path {
        Some(path) => load_content(&ctx.resolve_path(path).to_string_lossy())?,
        None => SiteContent::default(),
    };

    let mut session = CheckoutSession::from_config(&ctx.config.commerce);
    add_items(&mut session, &args.items)?;
    if args.items.is_empty() && args.open_cart {
        session.open_cart()?;
    } else if !args.open_cart && session.step() == CheckoutStep::CartOpen {
        session.dismiss();
    }

    let view = session.snapshot()?;
    let html = render_page(&content, &view);

    let target = args.output.as_deref().unwrap_or(&ctx.config.render.output);
    if target == "-" {
        print!("{}", html);
        return Ok(());
    }

    let path = ctx.resolve_path(target);
    fs::write(&path, &html)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = html.len(), "landing page rendered");

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "output": path.display().to_string(),
            "bytes": html.len(),
            "step": view.step,
        }));
    } else {
        ctx.output.success(&format!("Rendered {}", path.display()));
    }

    Ok(())
}

/// Load page copy overrides from JSON or TOML.
fn load_content(path: &str) -> Result<SiteContent> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read content file: {}", path))?;
    if path.ends_with(".json") {
        serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path))
    } else {
        toml::from_str(&text).with_context(|| format!("Failed to parse {}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_content_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "title = \"Preview\"\n").unwrap();

        let content = load_content(path.to_str().unwrap()).unwrap();
        assert_eq!(content.title, "Preview");
        assert_eq!(content.hero, SiteContent::default().hero);
    }
}
