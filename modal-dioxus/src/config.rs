//! Configuration for modal-dioxus.
//!
//! Loaded from `<config dir>/modal-dioxus/config.toml`. The `[modal]` table
//! holds container-wide defaults; `[window]` and `[logging]` are used by the
//! `mdx` demo binary.

use std::path::{Path, PathBuf};

use anyhow::Result;
use etcetera::base_strategy::{choose_base_strategy, BaseStrategy};
use serde::Deserialize;

use crate::options::{ModalOptions, ModalPosition};

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub modal: ModalOptions,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: String,
    pub suppressed_patterns: Vec<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "modal-dioxus".to_string(),
            width: 960.0,
            height: 640.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: Some(std::env::temp_dir().join("modal-dioxus.log")),
            level: "info".to_string(),
            suppressed_patterns: vec![
                "Dispatched unknown event".to_string(),
                "mousemove".to_string(),
                "mouseenter".to_string(),
                "mouseleave".to_string(),
                "pointermove".to_string(),
            ],
        }
    }
}

impl ModalConfig {
    /// Path of the default configuration file.
    pub fn default_path() -> Result<PathBuf> {
        let strategy = choose_base_strategy()?;
        Ok(strategy.config_dir().join("modal-dioxus").join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// Falls back to defaults if the file doesn't exist.
    /// Returns an error only if the file exists but is malformed.
    pub fn load_default() -> Result<Self> {
        let config_path = Self::default_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str::<ModalConfig>(&content)?;
        Ok(config)
    }

    /// Container defaults to pass to `ModalContainer`.
    #[must_use]
    pub fn defaults(&self) -> ModalOptions {
        self.modal.clone()
    }

    #[must_use]
    pub fn with_position(mut self, position: ModalPosition) -> Self {
        self.modal.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.modal.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    #[must_use]
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.logging.log_file = Some(path.into());
        self
    }

    /// Set the log level (e.g., "info", "debug", "warn").
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }
}
