use anyhow::{Context, Result, ensure};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use snake_common::DEFAULT_WORLD_EXTENT;
use snake_kernel::GameConfig;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            title: "Snake".into(),
        }
    }
}

/// World units visible on the narrower window axis, and the content scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub world_extent: [f32; 2],
    pub global_scale: [f32; 2],
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            world_extent: DEFAULT_WORLD_EXTENT.to_array(),
            global_scale: [1.0, 1.0],
        }
    }
}

impl ViewConfig {
    pub fn world_extent(&self) -> Vec2 {
        Vec2::from_array(self.world_extent)
    }

    pub fn global_scale(&self) -> Vec2 {
        Vec2::from_array(self.global_scale)
    }
}

/// Everything the desktop app reads at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub window: WindowConfig,
    pub view: ViewConfig,
    /// PNG sprite sheet. `None` uses the built-in atlas.
    pub atlas: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        self.game.validate()?;
        ensure!(
            self.window.width > 0 && self.window.height > 0,
            "window size must be non-zero, got {}x{}",
            self.window.width,
            self.window.height
        );
        ensure!(
            self.view.world_extent().cmpgt(Vec2::ZERO).all(),
            "world extent must be positive, got {:?}",
            self.view.world_extent
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_classic_window() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.window.title, "Snake");
        assert_eq!(config.view.world_extent(), Vec2::new(10.0, 10.0));
        assert_eq!(config.view.global_scale(), Vec2::ONE);
        assert!(config.atlas.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "game": {{ "seed": 5 }}, "window": {{ "title": "Tiny" }} }}"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.game.seed, Some(5));
        assert_eq!(config.game.step_interval, snake_kernel::DEFAULT_STEP_INTERVAL);
        assert_eq!(config.window.title, "Tiny");
        assert_eq!(config.window.width, 640);
    }

    #[test]
    fn rejects_bad_step_interval() {
        let err = AppConfig::from_json(r#"{ "game": { "step_interval": -1.0 } }"#).unwrap_err();
        assert!(err.to_string().contains("step interval"));
    }

    #[test]
    fn rejects_zero_extent() {
        assert!(AppConfig::from_json(r#"{ "view": { "world_extent": [0.0, 10.0] } }"#).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(dir.path().join("absent.json")).is_err());
    }
}
