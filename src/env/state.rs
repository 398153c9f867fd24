//! Episode state owned by the environment.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{GridPosition, Obstacle};

/// Why an episode terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TerminationReason {
    /// The waste was dropped into the bin.
    Delivered,
    /// The agent ended a step on an obstacle.
    Collision,
}

/// Episode lifecycle. `Terminated` and `Truncated` are absorbing until reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EpisodeStatus {
    #[default]
    Active,
    Terminated(TerminationReason),
    Truncated,
}

impl EpisodeStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, EpisodeStatus::Active)
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, EpisodeStatus::Terminated(_))
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, EpisodeStatus::Truncated)
    }
}

impl fmt::Display for EpisodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpisodeStatus::Active => write!(f, "active"),
            EpisodeStatus::Terminated(TerminationReason::Delivered) => write!(f, "delivered"),
            EpisodeStatus::Terminated(TerminationReason::Collision) => write!(f, "collision"),
            EpisodeStatus::Truncated => write!(f, "truncated"),
        }
    }
}

/// Full state of one episode.
///
/// Created by `reset`, mutated only by `step`, replaced by the next `reset`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EpisodeState {
    pub agent_position: GridPosition,
    /// Current waste cell. Equals the bin cell once delivered.
    pub waste_position: GridPosition,
    pub bin_position: GridPosition,
    pub carrying: bool,
    pub obstacles: Vec<Obstacle>,
    pub step_count: u32,
    pub max_steps: u32,
    pub grid_size: i32,
}

impl EpisodeState {
    /// Returns the obstacle occupying `position`, if any.
    pub fn obstacle_at(&self, position: GridPosition) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.position == position)
    }

    /// Current sub-goal: the bin while carrying, otherwise the waste.
    pub fn target(&self) -> GridPosition {
        if self.carrying {
            self.bin_position
        } else {
            self.waste_position
        }
    }

    /// Returns true once the step budget is used up.
    pub fn budget_exhausted(&self) -> bool {
        self.step_count >= self.max_steps
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            agent_position: self.agent_position,
            waste_position: self.waste_position,
            bin_position: self.bin_position,
            carrying: self.carrying,
            obstacles: &self.obstacles,
            grid_size: self.grid_size,
        }
    }
}

/// Read-only view of the episode for rendering collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Snapshot<'a> {
    pub agent_position: GridPosition,
    pub waste_position: GridPosition,
    pub bin_position: GridPosition,
    pub carrying: bool,
    pub obstacles: &'a [Obstacle],
    pub grid_size: i32,
}
