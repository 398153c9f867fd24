//! Environment contract consumed by policies and trainers.

use super::environment::{Info, StepResult};
use super::error::Result;
use super::observation::Observation;
use super::spaces::{ActionSpace, ObservationSpace};

/// A resettable, steppable episodic environment.
///
/// Actions are discrete indices into [`Environment::action_space`]:
/// - 0..=3: move forward, backward, right, left
/// - 4: interact (pick up or drop)
pub trait Environment {
    /// Starts a new episode, reseeding the environment's RNG if `seed` is given.
    fn reset(&mut self, seed: Option<u64>) -> Result<(Observation, Info)>;

    /// Advances the episode by one action.
    ///
    /// # Errors
    ///
    /// Fails with [`super::EnvError::InvalidAction`] for indices outside the
    /// action space, leaving the state untouched.
    fn step(&mut self, action: usize) -> Result<StepResult>;

    fn action_space(&self) -> ActionSpace;

    fn observation_space(&self) -> ObservationSpace;
}
