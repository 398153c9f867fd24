//! Observation encoding for the waste-collection environment.
//!
//! An observation is derived from the episode state on demand and never
//! stored. While the agent carries the waste, the waste field holds the
//! [`GridPosition::HIDDEN`] sentinel (all coordinates `-1`), signalling that
//! the item is off the grid. This sentinel deliberately falls outside the
//! declared `[0, grid_size - 1]` bounds; see [`super::ObservationSpace`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::state::EpisodeState;
use super::types::{AxisCount, GridPosition};

/// Agent-facing view of the episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    pub agent: GridPosition,
    /// Waste cell, or [`GridPosition::HIDDEN`] while carrying.
    pub waste: GridPosition,
    pub bin: GridPosition,
    /// 1 while carrying, else 0.
    pub carrying: u8,
}

impl Observation {
    /// Derives the observation for `state`.
    pub fn from_state(state: &EpisodeState) -> Self {
        Self {
            agent: state.agent_position,
            waste: if state.carrying {
                GridPosition::HIDDEN
            } else {
                state.waste_position
            },
            bin: state.bin_position,
            carrying: u8::from(state.carrying),
        }
    }

    /// Returns true if the waste field holds the hidden sentinel.
    pub fn waste_hidden(&self) -> bool {
        self.waste.is_hidden()
    }

    /// Flattens into `[agent.., waste.., bin.., carrying]`.
    ///
    /// The vector has `3 * axes.dims() + 1` entries.
    pub fn to_vec(&self, axes: AxisCount) -> Vec<i32> {
        let mut out = Vec::with_capacity(Self::flat_dim(axes));
        out.extend(self.agent.to_vec(axes));
        out.extend(self.waste.to_vec(axes));
        out.extend(self.bin.to_vec(axes));
        out.push(i32::from(self.carrying));
        out
    }

    /// Same layout as [`Observation::to_vec`], as `f64` features.
    pub fn features(&self, axes: AxisCount) -> Vec<f64> {
        self.to_vec(axes).into_iter().map(f64::from).collect()
    }

    /// Length of the flattened observation.
    pub fn flat_dim(axes: AxisCount) -> usize {
        3 * axes.dims() + 1
    }
}
