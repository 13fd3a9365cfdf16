//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sirik_commerce::config::CommerceConfig;

/// File names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["sirik.toml", ".sirik.toml", "sirik.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront settings.
    #[serde(default)]
    pub commerce: CommerceConfig,

    /// Landing page rendering.
    #[serde(default)]
    pub render: RenderConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config text, choosing the format by extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Landing page settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Where `sirik render` writes when no `--output` is given.
    #[serde(default = "default_output")]
    pub output: String,

    /// Optional JSON or TOML file overriding the page copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

fn default_output() -> String {
    "sirik.html".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            content: None,
        }
    }
}

/// Generate a commented default sirik.toml.
pub fn generate_default_config() -> String {
    r#"# SIRIK storefront configuration

[commerce]
currency = "INR"

[commerce.timings]
# Simulated latency of the mock services, in milliseconds.
pincode_lookup_ms = 1000
payment_processing_ms = 1500
# How long the order confirmation stays up before the session resets.
confirmation_display_ms = 3000

[render]
output = "sirik.html"
# content = "site.json"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use sirik_commerce::Currency;

    use super::*;

    #[test]
    fn test_generated_config_matches_defaults() {
        let config = CliConfig::parse("sirik.toml", &generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = CliConfig::parse(
            "sirik.toml",
            "[commerce]\ncurrency = \"USD\"\n[commerce.timings]\npincode_lookup_ms = 10\n",
        )
        .unwrap();
        assert_eq!(config.commerce.currency, Currency::USD);
        assert_eq!(config.commerce.timings.pincode_lookup_ms, 10);
        assert_eq!(config.commerce.timings.payment_processing_ms, 1500);
        assert_eq!(config.render.output, "sirik.html");
    }

    #[test]
    fn test_json_config() {
        let config = CliConfig::parse("sirik.json", r#"{"render": {"output": "out.html"}}"#).unwrap();
        assert_eq!(config.render.output, "out.html");
        assert!(CliConfig::parse("sirik.json", "not json").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sirik.toml");
        let path = path.to_str().unwrap();

        let mut config = CliConfig::default();
        config.render.content = Some("site.json".to_string());
        config.save(path).unwrap();

        assert_eq!(CliConfig::load(path).unwrap(), config);
    }
}
