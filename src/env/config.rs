//! Configuration for the waste-collection environment.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{EnvError, Result};
use super::types::AxisCount;

/// Reward coefficients applied by [`super::reward::RewardModel`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewardWeights {
    /// Cost charged on every step (subtracted).
    pub step_cost: f64,
    /// Penalty for a move blocked by the grid boundary (subtracted).
    pub boundary_penalty: f64,
    /// Shaping coefficient for progress toward the waste.
    pub approach_shaping: f64,
    /// Shaping coefficient for progress toward the bin while carrying.
    pub carry_shaping: f64,
    /// Reward for picking up the waste.
    pub pickup_reward: f64,
    /// Reward for dropping the waste into the bin.
    pub delivery_reward: f64,
    /// Penalty for an interact that neither picks up nor drops (subtracted).
    pub invalid_interact_penalty: f64,
    /// Penalty for ending a step on an obstacle (subtracted).
    pub collision_penalty: f64,
    /// Penalty for running out of steps (subtracted).
    pub truncation_penalty: f64,
}

impl Default for RewardWeights {
    fn default() -> Self {
        Self {
            step_cost: 0.1,
            boundary_penalty: 0.5,
            approach_shaping: 0.1,
            carry_shaping: 0.2,
            pickup_reward: 10.0,
            delivery_reward: 20.0,
            invalid_interact_penalty: 1.0,
            collision_penalty: 20.0,
            truncation_penalty: 5.0,
        }
    }
}

/// Configuration for the waste-collection environment.
///
/// Controls grid geometry, the step budget, obstacle layout and reward
/// shaping. Use struct update syntax to override individual fields:
///
/// ```
/// use wastegrid::env::EnvConfig;
///
/// let config = EnvConfig {
///     grid_size: 5,
///     max_steps: 100,
///     ..EnvConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnvConfig {
    // --- Geometry ---
    /// Side length of the square grid (cells per axis).
    pub grid_size: i32,
    /// Axis layout of encoded positions.
    pub axis_count: AxisCount,
    /// Step budget per episode.
    pub max_steps: u32,

    // --- Obstacles ---
    /// Whether houses are placed at all.
    pub has_obstacles: bool,
    /// Number of obstacles requested per episode.
    pub obstacle_count: usize,
    /// Lower bound (inclusive) of the obstacle size.
    pub obstacle_size_min: f64,
    /// Upper bound (exclusive) of the obstacle size.
    pub obstacle_size_max: f64,
    /// Total candidate draws allowed when placing obstacles.
    pub max_placement_attempts: usize,

    // --- Reward ---
    pub reward: RewardWeights,
}

impl EnvConfig {
    /// Number of obstacles to request, taking `has_obstacles` into account.
    pub fn effective_obstacle_count(&self) -> usize {
        if self.has_obstacles {
            self.obstacle_count
        } else {
            0
        }
    }

    /// Total number of cells on the ground plane.
    pub fn cell_count(&self) -> usize {
        let side = self.grid_size.max(0) as usize;
        side * side
    }

    /// Checks that the configuration describes a playable environment.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfig`] describing the first violated bound.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size < 2 {
            return Err(invalid(format!(
                "grid_size must be at least 2, got {}",
                self.grid_size
            )));
        }
        if self.max_steps == 0 {
            return Err(invalid("max_steps must be positive".to_string()));
        }
        if self.has_obstacles {
            let (min, max) = (self.obstacle_size_min, self.obstacle_size_max);
            if !(min.is_finite() && max.is_finite()) || min >= max {
                return Err(invalid(format!(
                    "obstacle size range [{min}, {max}) is empty or not finite"
                )));
            }
            if self.obstacle_count > 0 && self.max_placement_attempts == 0 {
                return Err(invalid(
                    "max_placement_attempts must be positive when obstacles are requested"
                        .to_string(),
                ));
            }
        }
        Ok(())
    }
}

fn invalid(reason: String) -> EnvError {
    EnvError::InvalidConfig(reason)
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            axis_count: AxisCount::Three,
            max_steps: 200,
            has_obstacles: true,
            obstacle_count: 3,
            obstacle_size_min: 1.2,
            obstacle_size_max: 2.0,
            max_placement_attempts: 1000,
            reward: RewardWeights::default(),
        }
    }
}
