//! Waste-collection grid environment.
//!
//! The environment core is split into leaf components and the state machine
//! that drives them:
//!
//! - [`PositionSampler`]: uniform cell sampling with an exclusion set.
//! - [`ObstacleGenerator`]: rejection-sampled, non-overlapping houses.
//! - [`RewardModel`]: pure reward function of a [`Transition`].
//! - [`WasteCollectionEnv`]: owns the [`EpisodeState`] and implements
//!   [`Environment`].

pub mod config;
pub mod environment;
pub mod error;
pub mod observation;
pub mod obstacles;
pub mod reward;
pub mod sampler;
pub mod spaces;
pub mod state;
pub mod trait_;
pub mod types;


pub use config::{EnvConfig, RewardWeights};
pub use environment::{Info, StepResult, WasteCollectionEnv};
pub use error::{EnvError, Result};
pub use observation::Observation;
pub use obstacles::{ObstacleGenerator, ObstacleLayout};
pub use reward::{RewardBreakdown, RewardModel, Transition};
pub use sampler::PositionSampler;
pub use spaces::{ActionSpace, ObservationSpace};
pub use state::{EpisodeState, EpisodeStatus, Snapshot, TerminationReason};
pub use trait_::Environment;
pub use types::{Action, AxisCount, GridPosition, Obstacle};
