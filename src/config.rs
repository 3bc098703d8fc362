use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "anthropic/claude-3.5-sonnet";
pub const DEFAULT_TEMPERATURE: f32 = 0.6;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Application configuration for gongwen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// OpenRouter API key; without one the mock generator is used
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    /// Wall-clock limit for one generation call
    pub timeout_secs: u64,
    /// Characters kept from each reference file
    pub max_reference_chars: usize,
    pub viewer: ViewerTheme,
}

/// Colors of the terminal preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerTheme {
    pub border: String,
    pub title: String,
    pub footer_bg: String,
    pub status_fg: String,
    pub outline_selected_bg: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_reference_chars: crate::reference::MAX_REFERENCE_CHARS,
            viewer: ViewerTheme::default(),
        }
    }
}

impl Default for ViewerTheme {
    fn default() -> Self {
        ViewerTheme {
            border: "#B22222".to_string(),              // Firebrick
            title: "#FFFFFF".to_string(),               // White
            footer_bg: "#2F2F2F".to_string(),           // Dark Gray
            status_fg: "#A0A0A0".to_string(),           // Light Gray
            outline_selected_bg: "#B22222".to_string(), // Firebrick
        }
    }
}

impl AppConfig {
    /// Load from the config directory, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config = match Self::get_config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => AppConfig::default(),
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the config directory
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::get_config_path() {
            self.save_to(&config_path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gongwen").join("config.toml"))
    }

    /// Write the default config file
    pub fn init_default() -> Result<()> {
        AppConfig::default().save()
    }

    /// `OPENROUTER_API_KEY` and `DEFAULT_MODEL` take precedence over the file
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup("OPENROUTER_API_KEY").filter(|key| !key.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(model) = lookup("DEFAULT_MODEL").filter(|model| !model.trim().is_empty()) {
            self.model = model;
        }
        self
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

/// Convert hex color string to ratatui Color
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

impl ViewerTheme {
    /// Color for a hex string, white if it does not parse
    pub fn color(&self, hex: &str) -> Color {
        hex_to_color(hex).unwrap_or(Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.model, "anthropic/claude-3.5-sonnet");
        assert_eq!(config.temperature, 0.6);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.max_reference_chars, 10_000);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "model = \"openai/gpt-4o\"\n\n[viewer]\nborder = \"#000000\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.model, "openai/gpt-4o");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.viewer.border, "#000000");
        assert_eq!(config.viewer.title, "#FFFFFF");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            api_key: Some("sk-test".to_string()),
            timeout_secs: 30,
            ..AppConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::default().with_env_overrides(|key| match key {
            "OPENROUTER_API_KEY" => Some("sk-env".to_string()),
            "DEFAULT_MODEL" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.api_key.as_deref(), Some("sk-env"));
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#FF0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(hex_to_color("00ff00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(hex_to_color("#FFF"), None);
        assert_eq!(hex_to_color("#GGGGGG"), None);
        // Six bytes, two characters
        assert_eq!(hex_to_color("#中中"), None);
        let theme = ViewerTheme {
            border: "#中中".to_string(),
            ..ViewerTheme::default()
        };
        assert_eq!(theme.color(&theme.border), Color::White);
    }
}
