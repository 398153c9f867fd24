use thiserror::Error;

/// Errors raised by the environment and its placement helpers.
///
/// Gameplay outcomes (boundary hits, invalid pickups or drops) are never
/// errors; they are reported through the reward.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("Invalid action {0}: expected a value in 0..=4")]
    InvalidAction(usize),

    #[error("No free cell left: {excluded} excluded cells cover the {grid_size}x{grid_size} grid")]
    PlacementExhausted { grid_size: i32, excluded: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Environment must be reset before stepping")]
    NotReset,

    #[error("Episode is over; call reset to start a new one")]
    EpisodeOver,
}

/// Convenience alias for results using [`EnvError`].
pub type Result<T> = std::result::Result<T, EnvError>;
