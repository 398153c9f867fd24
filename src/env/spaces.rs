//! Action and observation spaces.

use rand::Rng;

use super::observation::Observation;
use super::types::{Action, AxisCount, GridPosition};

/// Discrete action space `{0, .., n - 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpace {
    pub n: usize,
}

impl ActionSpace {
    /// Returns true if `action` is a valid index.
    pub fn contains(&self, action: usize) -> bool {
        action < self.n
    }

    /// Samples a uniformly random action index.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.n)
    }
}

impl Default for ActionSpace {
    fn default() -> Self {
        Self { n: Action::COUNT }
    }
}

/// Bounded record of the four observation fields.
///
/// Every position field is bounded to `[0, grid_size - 1]` per axis, with
/// one documented exception: the waste field may hold the all `-1` hidden
/// sentinel while the agent carries the waste. [`ObservationSpace::contains`]
/// accepts that sentinel only when `carrying == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationSpace {
    pub grid_size: i32,
    pub axes: AxisCount,
}

impl ObservationSpace {
    /// Inclusive per-axis bounds of position fields.
    pub fn bounds(&self) -> (i32, i32) {
        (0, self.grid_size - 1)
    }

    /// Length of a flattened observation.
    pub fn flat_dim(&self) -> usize {
        Observation::flat_dim(self.axes)
    }

    /// Returns true if `obs` lies in the space.
    pub fn contains(&self, obs: &Observation) -> bool {
        let waste_ok = if obs.carrying == 1 {
            obs.waste.is_hidden()
        } else {
            obs.waste.in_bounds(self.grid_size)
        };
        obs.carrying <= 1
            && waste_ok
            && obs.agent.in_bounds(self.grid_size)
            && obs.bin.in_bounds(self.grid_size)
    }

    fn cell<R: Rng + ?Sized>(&self, rng: &mut R) -> GridPosition {
        GridPosition::new(
            rng.gen_range(0..self.grid_size),
            rng.gen_range(0..self.grid_size),
        )
    }

    /// Samples an observation uniformly from the bounded fields.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Observation {
        let agent = self.cell(rng);
        let bin = self.cell(rng);
        let carrying = u8::from(rng.gen_bool(0.5));
        let waste = if carrying == 1 {
            GridPosition::HIDDEN
        } else {
            self.cell(rng)
        };
        Observation {
            agent,
            waste,
            bin,
            carrying,
        }
    }
}
