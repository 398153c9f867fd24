//! Policy trait for the waste-collection environment.

use crate::env::{Action, Observation};

/// A policy that selects the agent's next action from an observation.
pub trait Policy: Send + Sync {
    /// Selects one action given the current observation.
    fn select_action(&mut self, observation: &Observation) -> Action;

    /// Returns a human-readable name for this policy.
    fn name(&self) -> &str;
}
