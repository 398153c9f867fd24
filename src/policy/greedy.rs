//! Greedy heuristic policy.
//!
//! Walks straight toward the active sub-goal and interacts on arrival.
//! Obstacles are not part of the observation, so this policy can collide.

use super::trait_::Policy;
use crate::env::{Action, GridPosition, Observation};

/// Greedy Manhattan walker.
///
/// The target is the bin while carrying, otherwise the waste. The agent
/// closes the larger of the two axis gaps first (`x` on ties) and issues
/// `Interact` once it stands on the target.
#[derive(Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    pub fn new() -> Self {
        Self
    }

    fn target(observation: &Observation) -> GridPosition {
        if observation.carrying == 1 || observation.waste_hidden() {
            observation.bin
        } else {
            observation.waste
        }
    }
}

impl Policy for GreedyPolicy {
    fn select_action(&mut self, observation: &Observation) -> Action {
        let target = Self::target(observation);
        let dx = target.x - observation.agent.x;
        let dz = target.z - observation.agent.z;

        if dx == 0 && dz == 0 {
            Action::Interact
        } else if dx.abs() >= dz.abs() {
            if dx > 0 {
                Action::MoveRight
            } else {
                Action::MoveLeft
            }
        } else if dz > 0 {
            Action::MoveForward
        } else {
            Action::MoveBackward
        }
    }

    fn name(&self) -> &str {
        "greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(agent: GridPosition, carrying: u8) -> Observation {
        Observation {
            agent,
            waste: if carrying == 1 {
                GridPosition::HIDDEN
            } else {
                GridPosition::new(3, 1)
            },
            bin: GridPosition::new(0, 4),
            carrying,
        }
    }

    #[test]
    fn heads_for_waste_first() {
        let mut policy = GreedyPolicy::new();
        assert_eq!(
            policy.select_action(&obs(GridPosition::origin(), 0)),
            Action::MoveRight
        );
        assert_eq!(
            policy.select_action(&obs(GridPosition::new(3, 3), 0)),
            Action::MoveBackward
        );
    }

    #[test]
    fn interacts_on_target() {
        let mut policy = GreedyPolicy::new();
        assert_eq!(
            policy.select_action(&obs(GridPosition::new(3, 1), 0)),
            Action::Interact
        );
        assert_eq!(
            policy.select_action(&obs(GridPosition::new(0, 4), 1)),
            Action::Interact
        );
    }

    #[test]
    fn heads_for_bin_while_carrying() {
        let mut policy = GreedyPolicy::new();
        assert_eq!(
            policy.select_action(&obs(GridPosition::new(0, 0), 1)),
            Action::MoveForward
        );
        assert_eq!(
            policy.select_action(&obs(GridPosition::new(4, 4), 1)),
            Action::MoveLeft
        );
    }
}
