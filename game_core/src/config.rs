use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Arena, ConfigError, Params, Side};

/// Match length. The first side to `winner_score()` points takes the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BestOf {
    Three,
    #[default]
    Five,
    Seven,
}

impl BestOf {
    pub fn games(self) -> u8 {
        match self {
            BestOf::Three => 3,
            BestOf::Five => 5,
            BestOf::Seven => 7,
        }
    }

    pub fn winner_score(self) -> u8 {
        self.games() / 2 + 1
    }
}

impl TryFrom<u8> for BestOf {
    type Error = ConfigError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            3 => Ok(BestOf::Three),
            5 => Ok(BestOf::Five),
            7 => Ok(BestOf::Seven),
            other => Err(ConfigError::InvalidBestOf(other)),
        }
    }
}

impl fmt::Display for BestOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "best of {}", self.games())
    }
}

/// Match configuration
///
/// Only geometry and match length are configurable. Ball speed limits,
/// boost and deflection live in [`Params`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub track_speed: f32,
    pub ball_size: f32,
    pub best_of: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            track_speed: Params::TRACK_SPEED,
            ball_size: Params::BALL_SIZE,
            best_of: Params::DEFAULT_BEST_OF,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_margin", self.paddle_margin),
            ("paddle_speed", self.paddle_speed),
            ("track_speed", self.track_speed),
            ("ball_size", self.ball_size),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
            // The margin may be zero; everything else needs a size
            let in_range = if field == "paddle_margin" {
                value >= 0.0
            } else {
                value > 0.0
            };
            if !in_range {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.ball_size >= self.arena_height || self.ball_size >= self.arena_width {
            return Err(ConfigError::DoesNotFit { what: "ball" });
        }
        if self.paddle_height > self.arena_height
            || 2.0 * (self.paddle_margin + self.paddle_width) > self.arena_width
        {
            return Err(ConfigError::DoesNotFit { what: "paddles" });
        }

        self.best_of()?;
        Ok(())
    }

    pub fn best_of(&self) -> Result<BestOf, ConfigError> {
        BestOf::try_from(self.best_of)
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Left edge X of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_params() {
        let config = Config::new();
        assert_eq!(config.arena_width, 800.0);
        assert_eq!(config.arena_height, 600.0);
        assert_eq!(config.best_of, 5);
        assert!(config.validate().is_ok(), "Default config must validate");
    }

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 10.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 780.0, "Right paddle X position");
    }

    #[test]
    fn test_best_of_winner_score() {
        assert_eq!(BestOf::Three.winner_score(), 2);
        assert_eq!(BestOf::Five.winner_score(), 3);
        assert_eq!(BestOf::Seven.winner_score(), 4);
    }

    #[test]
    fn test_best_of_rejects_even_and_out_of_range() {
        for n in [0, 1, 2, 4, 6, 8, 9, 255] {
            assert!(
                matches!(BestOf::try_from(n), Err(ConfigError::InvalidBestOf(v)) if v == n),
                "best_of {} should be rejected",
                n
            );
        }
    }

    #[test]
    fn test_from_toml_partial_keeps_defaults() {
        let config = Config::from_toml_str("best_of = 7\narena_height = 480.0\n").unwrap();
        assert_eq!(config.best_of, 7);
        assert_eq!(config.arena_height, 480.0);
        assert_eq!(config.arena_width, Params::ARENA_WIDTH);
        assert_eq!(config.best_of().unwrap(), BestOf::Seven);
    }

    #[test]
    fn test_from_toml_rejects_invalid_best_of() {
        let err = Config::from_toml_str("best_of = 4").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBestOf(4)));
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        let err = Config::from_toml_str("best_of = \"five\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let config = Config {
            ball_size: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "ball_size",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_ball() {
        let config = Config {
            ball_size: 600.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DoesNotFit { what: "ball" })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_margin() {
        let err = Config::from_toml_str("paddle_margin = nan").unwrap_err();
        assert!(
            matches!(err, ConfigError::NotFinite { field: "paddle_margin", value } if value.is_nan()),
            "NaN margin must be rejected, got {:?}",
            err
        );
    }

    #[test]
    fn test_validate_rejects_infinite_sizes() {
        for text in ["arena_width = inf", "ball_size = inf", "paddle_speed = -inf"] {
            let err = Config::from_toml_str(text).unwrap_err();
            assert!(
                matches!(err, ConfigError::NotFinite { .. }),
                "{} should be rejected, got {:?}",
                text,
                err
            );
        }
    }

    #[test]
    fn test_validate_rejects_negative_margin_and_allows_zero() {
        let err = Config::from_toml_str("paddle_margin = -1.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "paddle_margin",
                ..
            }
        ));
        assert!(Config::from_toml_str("paddle_margin = 0.0").is_ok());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Config::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
