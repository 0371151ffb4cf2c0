//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use gantt_core::LayoutConfig;
use gantt_core::layout::{DEFAULT_FALLBACK_HEIGHT, DEFAULT_MIN_HEIGHT, DEFAULT_ROW_HEIGHT};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output width in pixels.
    pub width: f64,
    /// Where the rendered image is written.
    pub output: PathBuf,
    /// Height of one event row in pixels.
    pub row_height: f64,
    /// Canvas heights below this are replaced by `fallback_height`.
    pub min_height: f64,
    pub fallback_height: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 4000.0,
            output: PathBuf::from("out.png"),
            row_height: DEFAULT_ROW_HEIGHT,
            min_height: DEFAULT_MIN_HEIGHT,
            fallback_height: DEFAULT_FALLBACK_HEIGHT,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (GANTT_*)
        figment = figment.merge(Env::prefixed("GANTT_"));

        figment.extract()
    }

    /// Vertical layout rules for the renderer.
    pub const fn layout(&self) -> LayoutConfig {
        LayoutConfig {
            row_height: self.row_height,
            min_height: self.min_height,
            fallback_height: self.fallback_height,
        }
    }
}

/// Returns the platform-specific config directory for gantt.
///
/// On Linux: `~/.config/gantt`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("gantt"))
}
