//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\tunesheet\config.toml
//! - macOS: ~/Library/Application Support/tunesheet/config.toml
//! - Linux: ~/.config/tunesheet/config.toml
//!
//! The file is human-readable and every field is optional. It only holds
//! presentation tuning (geometry, gesture thresholds, timings, colours);
//! player state is never written to disk.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::motion::Rgba;
use crate::style::PlayerVariant;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial screen geometry (replaced by live window size in the GUI)
    pub geometry: GeometryConfig,

    /// Gesture thresholds and transition timings
    pub motion: MotionConfig,

    /// Appearance settings
    pub appearance: AppearanceConfig,
}

/// Screen size used before the window reports its own
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            screen_width: 420.0,
            screen_height: 860.0,
        }
    }
}

/// Gesture thresholds and transition timings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Panel height of the docked mini-player
    pub collapsed_height: f32,
    /// Release speed (units/s) beyond which a drag is a flick
    pub flick_velocity: f32,
    /// Snap duration after a panel drag ends
    pub drag_snap_ms: u64,
    /// Snap duration for tap-triggered expand/collapse of the panel
    pub tap_snap_ms: u64,
    /// Collapsed height of the bottom-sheet tab strip
    pub tab_min_height: f32,
    /// Distance kept free above the fully open sheet
    pub tab_max_inset: f32,
    /// Inset used when deciding which way a released sheet snaps
    pub tab_snap_inset: f32,
    /// Duration of sheet transitions
    pub tab_snap_ms: u64,
    /// Hold time before the vertical panel pan activates
    pub long_press_ms: u64,
    /// Minimum vertical speed for the panel pan to activate
    pub min_velocity_y: f32,
    /// Horizontal travel that changes track on release
    pub swipe_threshold: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            collapsed_height: 80.0,
            flick_velocity: 200.0,
            drag_snap_ms: 400,
            tap_snap_ms: 600,
            tab_min_height: 64.0,
            tab_max_inset: 80.0,
            tab_snap_inset: 70.0,
            tab_snap_ms: 300,
            long_press_ms: 300,
            min_velocity_y: 20.0,
            swipe_threshold: 100.0,
        }
    }
}

impl MotionConfig {
    pub fn drag_snap(&self) -> Duration {
        Duration::from_millis(self.drag_snap_ms)
    }

    pub fn tap_snap(&self) -> Duration {
        Duration::from_millis(self.tap_snap_ms)
    }

    pub fn tab_snap(&self) -> Duration {
        Duration::from_millis(self.tab_snap_ms)
    }

    pub fn long_press(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }
}

/// Appearance/theme settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Player layout variant
    pub variant: PlayerVariant,

    /// Background of the collapsed player and fallback accent
    pub base_color: Rgba,

    /// Backdrop behind the open bottom sheet
    pub sheet_backdrop: Rgba,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            variant: PlayerVariant::default(),
            base_color: Rgba::from_rgba8(0x17, 0x17, 0x17, 0xff),
            sheet_backdrop: Rgba::from_rgba8(0x17, 0x17, 0x17, 0x80),
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tunesheet"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to disk
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    let path = dir.join("config.toml");

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::CreateDir(dir.clone(), e))?;

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write to temp, then rename
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, &path)
        .map_err(|e| ConfigError::Rename(temp_path, path.clone(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(path)
}

/// Save configuration off the UI thread (for use in Iced tasks)
pub async fn save_async(config: Config) -> Result<PathBuf, ConfigError> {
    tokio::task::spawn_blocking(move || save(&config))
        .await
        .map_err(|e| ConfigError::TaskJoin(e.to_string()))?
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),

    #[error("Task join error: {0}")]
    TaskJoin(String),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[geometry]"));
        assert!(toml.contains("[motion]"));
        assert!(toml.contains("[appearance]"));
        assert!(toml.contains("#171717ff"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.geometry.screen_height = 932.0;
        config.motion.flick_velocity = 350.0;
        config.appearance.variant = PlayerVariant::Classic;

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.geometry.screen_height, 932.0);
        assert_eq!(parsed.motion.flick_velocity, 350.0);
        assert_eq!(parsed.appearance.variant, PlayerVariant::Classic);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[motion]
tab_snap_inset = 80.0
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.motion.tab_snap_inset, 80.0);
        assert_eq!(config.motion.collapsed_height, 80.0);
        assert_eq!(config.motion.drag_snap(), Duration::from_millis(400));
        assert_eq!(config.geometry.screen_width, 420.0);
        assert_eq!(config.appearance.variant, PlayerVariant::Docked);
    }

    #[test]
    fn test_bad_colour_is_rejected() {
        let toml = r#"
[appearance]
base_color = "not-a-colour"
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }
}
