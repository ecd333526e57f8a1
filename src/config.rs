use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::SLIDE_INTERVAL;
use crate::error::{PortfolioError, Result};

/// Page content and behavior settings, read from a TOML file.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortfolioConfig {
    pub owner: String,
    pub phrases: Vec<String>,
    pub about: String,
    pub projects: Vec<Project>,
    pub slides_dir: Option<PathBuf>,
    pub autoplay: bool,
    /// Seconds between automatic slide advances.
    pub slide_interval: f32,
    pub typing_jitter: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            owner: "Jordan Doe".to_string(),
            phrases: vec![
                "Software Engineer".to_string(),
                "Systems Programmer".to_string(),
                "Open Source Contributor".to_string(),
            ],
            about: "I build fast, reliable software and enjoy working close to the metal.\n\
                    Most of my work lives somewhere between compilers, storage engines\n\
                    and the tools developers use every day."
                .to_string(),
            projects: vec![
                Project::new("Log Indexer", "Append-only log store with a compact index"),
                Project::new("Packet Scope", "Terminal UI for live network captures"),
                Project::new("Tiny VM", "A bytecode interpreter in under 3k lines"),
                Project::new("Photo Wall", "Animated photo slideshow renderer"),
                Project::new("Dotfiles", "Reproducible workstation setup"),
            ],
            slides_dir: None,
            autoplay: true,
            slide_interval: SLIDE_INTERVAL,
            typing_jitter: 0.3,
        }
    }
}

impl Project {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl PortfolioConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| PortfolioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| PortfolioError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), projects = config.projects.len(), "config loaded");
        Ok(config)
    }

    pub fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(text)?;
        if config.slide_interval.is_nan() || config.slide_interval <= 0.0 {
            tracing::warn!(value = config.slide_interval, "slide_interval must be positive, using default");
            config.slide_interval = SLIDE_INTERVAL;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(PortfolioConfig::parse("").unwrap(), PortfolioConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = PortfolioConfig::parse(
            r#"
            owner = "Ada"
            phrases = ["Engineer"]
            autoplay = false
            slide_interval = 2.5

            [[projects]]
            title = "Engine"
            "#,
        )
        .unwrap();
        assert_eq!(config.owner, "Ada");
        assert_eq!(config.phrases, vec!["Engineer"]);
        assert!(!config.autoplay);
        assert_eq!(config.slide_interval, 2.5);
        assert_eq!(config.projects, vec![Project::new("Engine", "")]);
        assert_eq!(config.about, PortfolioConfig::default().about);
    }

    #[test]
    fn non_positive_interval_falls_back() {
        let config = PortfolioConfig::parse("slide_interval = 0.0").unwrap();
        assert_eq!(config.slide_interval, SLIDE_INTERVAL);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(PortfolioConfig::parse("colour = \"red\"").is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = PortfolioConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, PortfolioError::Io { .. }));
    }
}
