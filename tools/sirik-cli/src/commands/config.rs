//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, format } => init_config(force, &format, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let commerce = &ctx.config.commerce;
    ctx.output.info("[commerce]");
    ctx.output.kv("currency", commerce.currency.code());
    ctx.output.info("[commerce.timings]");
    ctx.output.kv("pincode_lookup_ms", &commerce.timings.pincode_lookup_ms.to_string());
    ctx.output.kv(
        "payment_processing_ms",
        &commerce.timings.payment_processing_ms.to_string(),
    );
    ctx.output.kv(
        "confirmation_display_ms",
        &commerce.timings.confirmation_display_ms.to_string(),
    );

    ctx.output.info("[render]");
    ctx.output.kv("output", &ctx.config.render.output);
    if let Some(ref content) = ctx.config.render.content {
        ctx.output.kv("content", content);
    }

    Ok(())
}

fn init_config(force: bool, format: &str, ctx: &Context) -> Result<()> {
    let file_name = match format {
        "toml" => "sirik.toml",
        "json" => "sirik.json",
        other => bail!("Unknown config format '{}'. Use toml or json.", other),
    };
    let config_path = ctx.cwd.join(file_name);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if format == "json" {
        CliConfig::default().save(&config_path.to_string_lossy())?;
    } else {
        fs::write(&config_path, generate_default_config())?;
    }
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check(ctx);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }
    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");
    Ok(())
}

/// (errors, warnings) for the loaded configuration.
fn check(ctx: &Context) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let timings = &ctx.config.commerce.timings;

    if ctx.config.render.output.trim().is_empty() {
        errors.push("render.output must not be empty".to_string());
    }

    if let Some(ref content) = ctx.config.render.content {
        if !ctx.resolve_path(content).exists() {
            errors.push(format!("render.content '{}' does not exist", content));
        }
    }

    for (key, ms) in [
        ("pincode_lookup_ms", timings.pincode_lookup_ms),
        ("payment_processing_ms", timings.payment_processing_ms),
        ("confirmation_display_ms", timings.confirmation_display_ms),
    ] {
        if ms > 60_000 {
            warnings.push(format!("commerce.timings.{} is over a minute ({} ms)", key, ms));
        }
    }

    if timings.confirmation_display_ms == 0 {
        warnings.push(
            "commerce.timings.confirmation_display_ms is 0; confirmations close immediately"
                .to_string(),
        );
    }

    (errors, warnings)
}
