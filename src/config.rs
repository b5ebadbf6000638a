//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table and the user's file is merged on top of it, so a
//! config file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_name = "Souk-Moussel"  # Shown in page headers and titles
//! assets_dir = "public"       # Copied verbatim into the output root
//!
//! [http]
//! powered_by_header = false   # Emit X-Powered-By in the generated _headers file
//!
//! [images]
//! unoptimized = true          # Reference remote images directly
//!
//! [[images.remote_patterns]]  # Allowed remote image origins
//! protocol = "https"
//! hostname = "images.unsplash.com"
//! pathname = "/**"
//!
//! [colors.light]
//! background = "#fbfaf5"
//! text = "#1f2a1d"
//! text_muted = "#5c6b57"
//! border = "#dfe5d6"
//! accent = "#2f7d32"
//! badge_background = "#eef5e9"
//!
//! [colors.dark]
//! background = "#10150f"
//! text = "#e8eee4"
//! text_muted = "#9aab93"
//! border = "#2b3628"
//! accent = "#7cc47f"
//! badge_background = "#1c261a"
//! ```
//!
//! ## Merging
//!
//! Tables merge key by key. Arrays are replaced wholesale: a user file that
//! declares `[[images.remote_patterns]]` replaces the stock origin list rather
//! than appending to it.
//!
//! Unknown keys are rejected to catch typos early.

use crate::images::RemotePattern;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the config directory.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Brand name shown in headers and page titles.
    pub site_name: String,
    /// Directory of static files copied into the output root, relative to the
    /// config directory. Skipped when it does not exist.
    pub assets_dir: String,
    /// Response header settings for the static host.
    pub http: HttpConfig,
    /// Remote image origins and optimization switch.
    pub images: ImagesConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Souk-Moussel".to_string(),
            assets_dir: "public".to_string(),
            http: HttpConfig::default(),
            images: ImagesConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site_name must not be empty".into(),
            ));
        }
        if !self.images.unoptimized {
            return Err(ConfigError::Validation(
                "images.unoptimized must be true: images are served as-is, there is no optimization step".into(),
            ));
        }
        for (i, pattern) in self.images.remote_patterns.iter().enumerate() {
            if pattern.hostname.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "images.remote_patterns[{i}].hostname must not be empty"
                )));
            }
            if let Some(protocol) = pattern
                .protocol
                .as_deref()
                .filter(|p| !matches!(*p, "http" | "https"))
            {
                return Err(ConfigError::Validation(format!(
                    "images.remote_patterns[{i}].protocol must be \"http\" or \"https\", got {protocol:?}"
                )));
            }
            if pattern
                .pathname
                .as_deref()
                .is_some_and(|p| !p.starts_with('/'))
            {
                return Err(ConfigError::Validation(format!(
                    "images.remote_patterns[{i}].pathname must start with '/'"
                )));
            }
        }
        for (mode, scheme) in [("light", &self.colors.light), ("dark", &self.colors.dark)] {
            for (key, value) in scheme.entries() {
                // Values are inlined into <style>; keep them to one declaration.
                if value.contains(['<', '>', '{', '}', ';']) {
                    return Err(ConfigError::Validation(format!(
                        "colors.{mode}.{key} must be a plain CSS color, got {value:?}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Response header settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    /// Advertise the generator through `X-Powered-By`. Off by default.
    pub powered_by_header: bool,
}

/// Image settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Images are referenced at their original URL, never transformed.
    pub unoptimized: bool,
    /// Remote origins content images may be loaded from.
    pub remote_patterns: Vec<RemotePattern>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            unoptimized: true,
            remote_patterns: vec![RemotePattern {
                protocol: Some("https".to_string()),
                hostname: "images.unsplash.com".to_string(),
                port: None,
                pathname: Some("/**".to_string()),
            }],
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Secondary text: descriptions, testimonial roles, follow-up messages.
    pub text_muted: String,
    pub border: String,
    /// Brand green: buttons, success indicator, links.
    pub accent: String,
    /// Background of the order number badge.
    pub badge_background: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#fbfaf5".to_string(),
            text: "#1f2a1d".to_string(),
            text_muted: "#5c6b57".to_string(),
            border: "#dfe5d6".to_string(),
            accent: "#2f7d32".to_string(),
            badge_background: "#eef5e9".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#10150f".to_string(),
            text: "#e8eee4".to_string(),
            text_muted: "#9aab93".to_string(),
            border: "#2b3628".to_string(),
            accent: "#7cc47f".to_string(),
            badge_background: "#1c261a".to_string(),
        }
    }
}

impl ColorScheme {
    /// `(config key, value)` pairs in declaration order.
    fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("background", &self.background),
            ("text", &self.text),
            ("text_muted", &self.text_muted),
            ("border", &self.border),
            ("accent", &self.accent),
            ("badge_background", &self.badge_background),
        ]
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no config file.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Souk-Moussel Storefront Configuration
# ======================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# Brand name shown in page headers and titles.
site_name = "Souk-Moussel"

# Static files (favicon, local images) copied into the output root.
# Relative to the directory holding this file. Ignored if missing.
assets_dir = "public"

# ---------------------------------------------------------------------------
# Response headers
# ---------------------------------------------------------------------------
[http]
# Emit "X-Powered-By: souk-moussel" in the generated _headers file.
powered_by_header = false

# ---------------------------------------------------------------------------
# Images
# ---------------------------------------------------------------------------
[images]
# Remote images are referenced at their original URL. There is no resizing
# or re-encoding step, so this must stay true.
unoptimized = true

# Remote origins content images may come from. Declaring any pattern here
# replaces this whole list.
#   protocol  "http" or "https" (omit for either)
#   hostname  "*" matches one label, "**" any number of labels
#   port      omit for any port, "" for the default port only
#   pathname  "/**" for any path (omit for any path)
[[images.remote_patterns]]
protocol = "https"
hostname = "images.unsplash.com"
pathname = "/**"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#fbfaf5"
text = "#1f2a1d"
text_muted = "#5c6b57"
border = "#dfe5d6"
accent = "#2f7d32"           # Buttons, success indicator, links
badge_background = "#eef5e9" # Order number badge

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#10150f"
text = "#e8eee4"
text_muted = "#9aab93"
border = "#2b3628"
accent = "#7cc47f"
badge_background = "#1c261a"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}
    }}
}}"#,
        light = scheme_properties(&colors.light, 1),
        dark = scheme_properties(&colors.dark, 2),
    )
}

fn scheme_properties(scheme: &ColorScheme, depth: usize) -> String {
    let pad = "    ".repeat(depth);
    [
        ("--color-bg", &scheme.background),
        ("--color-text", &scheme.text),
        ("--color-text-muted", &scheme.text_muted),
        ("--color-border", &scheme.border),
        ("--color-accent", &scheme.accent),
        ("--color-badge-bg", &scheme.badge_background),
    ]
    .iter()
    .map(|(name, value)| format!("{pad}{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.site_name, "Souk-Moussel");
        assert_eq!(config.assets_dir, "public");
        assert!(!config.http.powered_by_header);
        assert!(config.images.unoptimized);
        assert_eq!(config.images.remote_patterns.len(), 1);
        assert_eq!(
            config.images.remote_patterns[0].hostname,
            "images.unsplash.com"
        );
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors.light]
accent = "#1b5e20"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.colors.light.accent, "#1b5e20");
        assert_eq!(config.colors.light.background, "#fbfaf5");
        assert_eq!(config.site_name, "Souk-Moussel");
    }

    #[test]
    fn parse_remote_patterns() {
        let toml = r#"
[[images.remote_patterns]]
protocol = "https"
hostname = "**.cdn.souk-moussel.tn"
port = ""

[[images.remote_patterns]]
hostname = "localhost"
port = "8080"
pathname = "/uploads/**"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        let patterns = &config.images.remote_patterns;
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].port.as_deref(), Some(""));
        assert_eq!(patterns[0].pathname, None);
        assert_eq!(patterns[1].protocol, None);
        assert_eq!(patterns[1].pathname.as_deref(), Some("/uploads/**"));
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.light.background = "#f0f0f0".to_string();
        colors.dark.background = "#1a1a1a".to_string();

        let css = generate_color_css(&colors);
        assert!(css.contains("--color-bg: #f0f0f0;"));
        assert!(css.contains("--color-bg: #1a1a1a;"));
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
    }

    #[test]
    fn generate_css_includes_all_variables() {
        let css = generate_color_css(&ColorConfig::default());
        for var in [
            "--color-bg:",
            "--color-text:",
            "--color-text-muted:",
            "--color-border:",
            "--color-accent:",
            "--color-badge-bg:",
        ] {
            assert_eq!(css.matches(var).count(), 2, "{var} in both schemes");
        }
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site_name, "Souk-Moussel");
        assert_eq!(config.images.remote_patterns.len(), 1);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
site_name = "Souk Moussel Sfax"

[http]
powered_by_header = true
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site_name, "Souk Moussel Sfax");
        assert!(config.http.powered_by_header);
        assert!(config.images.unoptimized);
    }

    #[test]
    fn load_config_patterns_replace_stock_list() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
[[images.remote_patterns]]
hostname = "cdn.example.org"
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        let hosts: Vec<&str> = config
            .images
            .remote_patterns
            .iter()
            .map(|p| p.hostname.as_str())
            .collect();
        assert_eq!(hosts, vec!["cdn.example.org"]);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "this is not valid toml [[[").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_rejects_optimized_images() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
[images]
unoptimized = false
"#,
        )
        .unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"site_name = "a""#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"site_name = "b""#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("site_name").unwrap().as_str(), Some("b"));
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fff"
text = "#000"
"##,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fafafa"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let light = merged.get("colors").unwrap().get("light").unwrap();
        assert_eq!(light.get("background").unwrap().as_str(), Some("#fafafa"));
        assert_eq!(light.get("text").unwrap().as_str(), Some("#000"));
    }

    #[test]
    fn merge_toml_arrays_are_replaced() {
        let base: toml::Value = toml::from_str(r#"list = [1, 2, 3]"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"list = [9]"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("list").unwrap().as_array().unwrap().len(), 1);
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[images]
unoptimised = true
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_pattern_key_rejected() {
        let toml_str = r#"
[[images.remote_patterns]]
host = "example.org"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_empty_site_name() {
        let mut config = SiteConfig::default();
        config.site_name = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site_name"));
    }

    #[test]
    fn validate_pattern_hostname_required() {
        let mut config = SiteConfig::default();
        config.images.remote_patterns[0].hostname = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("remote_patterns[0].hostname"));
    }

    #[test]
    fn validate_pattern_protocol() {
        let mut config = SiteConfig::default();
        config.images.remote_patterns[0].protocol = Some("ftp".to_string());
        assert!(config.validate().is_err());
        config.images.remote_patterns[0].protocol = Some("http".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_pattern_pathname_is_absolute() {
        let mut config = SiteConfig::default();
        config.images.remote_patterns[0].pathname = Some("photos/**".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_color_closing_style_tag() {
        let mut config = SiteConfig::default();
        config.colors.dark.accent = "red</style><script>alert(1)</script>".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("colors.dark.accent"));
    }

    #[test]
    fn validate_rejects_color_injecting_rules() {
        let mut config = SiteConfig::default();
        config.colors.light.background = "#fff; } body { display: none".to_string();
        assert!(config.validate().is_err());
        config.colors.light.background = "rgb(250 250 245 / 90%)".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_config_rejects_markup_in_colors() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "[colors.light]\ntext = \"</style>\"\n",
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    // =========================================================================
    // stock config tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.site_name, defaults.site_name);
        assert_eq!(config.assets_dir, defaults.assets_dir);
        assert_eq!(config.http.powered_by_header, defaults.http.powered_by_header);
        assert_eq!(config.images.unoptimized, defaults.images.unoptimized);
        assert_eq!(config.images.remote_patterns, defaults.images.remote_patterns);
        assert_eq!(config.colors.light.accent, defaults.colors.light.accent);
        assert_eq!(config.colors.dark.background, defaults.colors.dark.background);
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.is_table());
        assert!(val.get("http").is_some());
        assert!(val.get("images").is_some());
        assert!(val.get("colors").is_some());
    }

    #[test]
    fn resolve_config_with_no_overlay() {
        let config = resolve_config(stock_defaults_value(), None).unwrap();
        assert_eq!(config.site_name, "Souk-Moussel");
        assert_eq!(config.images.remote_patterns.len(), 1);
    }
}
