//! wastegrid - episodic waste-collection grid world
//!
//! A single agent must find a waste item, pick it up, carry it to a bin and
//! drop it while avoiding houses that are placed anew every episode. The
//! environment exposes a reset/step contract with discrete actions for an
//! external learning algorithm.

pub mod env;
pub mod metrics;
pub mod policy;

pub use env::{
    Action, EnvConfig, EnvError, Environment, EpisodeStatus, GridPosition, Observation,
    StepResult, WasteCollectionEnv,
};
pub use metrics::EvaluationMetrics;
pub use policy::{GreedyPolicy, Policy, RandomPolicy};
