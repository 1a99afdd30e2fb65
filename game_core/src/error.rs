use thiserror::Error;

/// Errors raised while loading or validating a [`crate::Config`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("best_of must be 3, 5 or 7, got {0}")]
    InvalidBestOf(u8),
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{what} does not fit inside the arena")]
    DoesNotFit { what: &'static str },
}

/// Failure reported by a cue sink. Never propagated past the core.
#[derive(Debug, Error)]
pub enum CueError {
    #[error("cue sink unavailable: {0}")]
    Unavailable(String),
}
