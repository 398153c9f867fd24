//! Reward model for the waste-collection environment.
//!
//! The reward is a pure function of the state before a step, the action and
//! the state after it. It keeps no memory between steps.

use super::config::RewardWeights;
use super::state::{EpisodeState, EpisodeStatus, TerminationReason};
use super::types::Action;

/// One resolved step: the state before, the action, and the state after.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    pub prev: &'a EpisodeState,
    pub action: Action,
    pub next: &'a EpisodeState,
}

impl<'a> Transition<'a> {
    pub fn new(prev: &'a EpisodeState, action: Action, next: &'a EpisodeState) -> Self {
        Self { prev, action, next }
    }

    /// A move that left the agent in place because of the grid boundary.
    pub fn blocked(&self) -> bool {
        self.action.is_move() && self.prev.agent_position == self.next.agent_position
    }

    pub fn picked_up(&self) -> bool {
        self.action == Action::Interact && !self.prev.carrying && self.next.carrying
    }

    pub fn delivered(&self) -> bool {
        self.action == Action::Interact && self.prev.carrying && !self.next.carrying
    }

    pub fn collided(&self) -> bool {
        self.next.obstacle_at(self.next.agent_position).is_some()
    }

    /// Resulting episode status. Collision takes precedence over delivery.
    pub fn status(&self) -> EpisodeStatus {
        if self.collided() {
            EpisodeStatus::Terminated(TerminationReason::Collision)
        } else if self.delivered() {
            EpisodeStatus::Terminated(TerminationReason::Delivered)
        } else if self.next.budget_exhausted() {
            EpisodeStatus::Truncated
        } else {
            EpisodeStatus::Active
        }
    }
}

/// Per-term decomposition of a step reward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RewardBreakdown {
    pub step_cost: f64,
    pub movement: f64,
    pub interaction: f64,
    pub collision: f64,
    pub truncation: f64,
}

impl RewardBreakdown {
    /// Sum of all terms.
    pub fn total(&self) -> f64 {
        self.step_cost + self.movement + self.interaction + self.collision + self.truncation
    }
}

/// Computes step rewards from a set of [`RewardWeights`].
#[derive(Debug, Clone, Default)]
pub struct RewardModel {
    weights: RewardWeights,
}

impl RewardModel {
    pub fn new(weights: RewardWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &RewardWeights {
        &self.weights
    }

    /// Computes the reward for one transition.
    ///
    /// # Components
    ///
    /// 1. **Step cost**: `-step_cost`, always.
    /// 2. **Movement**: `-boundary_penalty` if the move was blocked, otherwise
    ///    `(d_prev - d_next) × k` where `d` is the ground-plane Manhattan
    ///    distance to the active target and `k` is `carry_shaping` while
    ///    carrying, `approach_shaping` otherwise.
    /// 3. **Interaction**: `+pickup_reward`, `+delivery_reward`, or
    ///    `-invalid_interact_penalty`.
    /// 4. **Collision**: `-collision_penalty` if the agent ends on an obstacle.
    /// 5. **Truncation**: `-truncation_penalty` if the budget ran out without
    ///    termination.
    pub fn compute(&self, t: &Transition<'_>) -> RewardBreakdown {
        let w = &self.weights;
        let mut r = RewardBreakdown {
            step_cost: -w.step_cost,
            ..RewardBreakdown::default()
        };

        if t.action.is_move() {
            r.movement = if t.blocked() {
                -w.boundary_penalty
            } else {
                let target = t.prev.target();
                let progress = t.prev.agent_position.manhattan(&target)
                    - t.next.agent_position.manhattan(&target);
                let k = if t.prev.carrying {
                    w.carry_shaping
                } else {
                    w.approach_shaping
                };
                f64::from(progress) * k
            };
        } else if t.picked_up() {
            r.interaction = w.pickup_reward;
        } else if t.delivered() {
            r.interaction = w.delivery_reward;
        } else {
            r.interaction = -w.invalid_interact_penalty;
        }

        match t.status() {
            EpisodeStatus::Terminated(TerminationReason::Collision) => {
                r.collision = -w.collision_penalty;
            }
            EpisodeStatus::Truncated => r.truncation = -w.truncation_penalty,
            _ => {}
        }

        r
    }
}
