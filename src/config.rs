//! file: config.rs
//! author: Jacob Xie
//! date: 2025/12/20 12:15:33 Saturday
//! brief: tunable game settings, optionally read from TOML

use std::{fs, path::Path, time::Duration};

use serde::Deserialize;

use crate::{
    error::{GameError, Result},
    game::{Catalog, ServiceEntry, default_entries},
};

const GAME_DURATION_SECS: u64 = 30;
const FEEDBACK_DURATION_MS: u64 = 1500;
const SCORE_INCREMENT: u32 = 10;
const WINDOW_WIDTH: f32 = 800.0;
const WINDOW_HEIGHT: f32 = 600.0;
const FPS: u32 = 60;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    pub duration_secs: u64,
    pub feedback_ms: u64,
    pub score_increment: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            duration_secs: GAME_DURATION_SECS,
            feedback_ms: FEEDBACK_DURATION_MS,
            score_increment: SCORE_INCREMENT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            fps: FPS,
        }
    }
}

impl WindowConfig {
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub round: RoundConfig,
    pub window: WindowConfig,
    pub catalog: Vec<ServiceEntry>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round: RoundConfig::default(),
            window: WindowConfig::default(),
            catalog: default_entries(),
        }
    }
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.round.duration_secs == 0 {
            return Err(invalid("round.duration_secs must be positive"));
        }
        if self.round.feedback_ms == 0 {
            return Err(invalid("round.feedback_ms must be positive"));
        }
        if self.window.fps == 0 {
            return Err(invalid("window.fps must be positive"));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(invalid("window size must be positive"));
        }
        Ok(())
    }

    pub fn build_catalog(&self) -> Result<Catalog> {
        Catalog::new(self.catalog.clone())
    }
}

fn invalid(message: &str) -> GameError {
    GameError::InvalidConfig {
        message: message.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Rgb;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.round.duration_secs, 30);
        assert_eq!(config.round.feedback_ms, 1500);
        assert_eq!(config.round.score_increment, 10);
        assert_eq!(config.catalog.len(), 6);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            [round]
            duration_secs = 45

            [[catalog]]
            name = "SQS"
            description = "Passes notes between programs"
            color = [10, 20, 30]

            [[catalog]]
            name = "SNS"
            description = "Sends you messages"
            color = [40, 50, 60]
            "#,
        )
        .unwrap();

        assert_eq!(config.round.duration_secs, 45);
        assert_eq!(config.round.feedback_ms, 1500);
        assert_eq!(config.window.fps, 60);
        assert_eq!(config.catalog.len(), 2);
        assert_eq!(config.catalog[0].color, Rgb::new(10, 20, 30));
        assert!(config.build_catalog().is_ok());
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = GameConfig::from_toml_str("[round]\nduration_secs = 0\n").unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig { .. }));
    }

    #[test]
    fn zero_fps_is_rejected() {
        let err = GameConfig::from_toml_str("[window]\nfps = 0\n").unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = GameConfig::from_toml_str("[round\n").unwrap_err();
        assert!(matches!(err, GameError::Toml(_)));
    }

    #[test]
    fn single_entry_catalog_fails_to_build() {
        let config = GameConfig::from_toml_str(
            "[[catalog]]\nname = \"S3\"\ndescription = \"Stores\"\ncolor = [1, 2, 3]\n",
        )
        .unwrap();
        assert!(matches!(
            config.build_catalog(),
            Err(GameError::InsufficientCatalog { len: 1 })
        ));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        fs::write(&path, "[round]\nscore_increment = 5\n").unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.round.score_increment, 5);

        let missing = GameConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, GameError::Io(_)));
    }

    #[test]
    fn frame_delay_follows_fps() {
        let window = WindowConfig::default();
        assert_eq!(window.frame_delay(), Duration::from_millis(16));
    }
}
