//! Waste-collection environment.
//!
//! Implements the episode loop:
//! reset → (move | interact) → collision check → truncation check → reward.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace, warn};

use super::config::EnvConfig;
use super::error::{EnvError, Result};
use super::obstacles::ObstacleGenerator;
use super::observation::Observation;
use super::reward::{RewardBreakdown, RewardModel, Transition};
use super::sampler::PositionSampler;
use super::spaces::{ActionSpace, ObservationSpace};
use super::state::{EpisodeState, EpisodeStatus, Snapshot, TerminationReason};
use super::trait_::Environment;
use super::types::{Action, GridPosition};

/// Auxiliary per-step information. Empty unless a caller extends it.
pub type Info = HashMap<String, f64>;

/// Result of a single environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Observation after the step.
    pub observation: Observation,
    /// Total reward for the step.
    pub reward: f64,
    /// The episode ended by delivery or collision.
    pub terminated: bool,
    /// The episode ran out of steps without terminating.
    pub truncated: bool,
    pub info: Info,
    /// Episode status after the step.
    pub status: EpisodeStatus,
    /// Per-term decomposition of `reward`.
    pub breakdown: RewardBreakdown,
}

impl StepResult {
    /// Returns true if the episode is over either way.
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Single-agent waste-collection grid environment.
///
/// An agent starts at the grid origin, walks to a randomly placed waste item,
/// picks it up, carries it to a randomly placed bin and drops it. Houses are
/// regenerated every episode; ending a step on one terminates the episode.
///
/// # Lifecycle
///
/// 1. Call [`WasteCollectionEnv::new`] with configuration and seed.
/// 2. Call [`WasteCollectionEnv::reset`] to initialize an episode.
/// 3. Call [`WasteCollectionEnv::step`] until the result is terminated or
///    truncated.
/// 4. Reset again for the next episode.
///
/// All randomness comes from the environment's own [`StdRng`], so two
/// environments with the same seed and actions produce the same trajectory.
#[derive(Debug)]
pub struct WasteCollectionEnv {
    config: EnvConfig,
    reward_model: RewardModel,
    obstacle_generator: ObstacleGenerator,
    state: Option<EpisodeState>,
    status: EpisodeStatus,
    rng: StdRng,
    /// Cumulative reward this episode.
    pub cumulative_reward: f64,
}

impl WasteCollectionEnv {
    /// Creates a new environment with the given configuration and RNG seed.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: EnvConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reward_model: RewardModel::new(config.reward.clone()),
            obstacle_generator: ObstacleGenerator::new(
                config.max_placement_attempts,
                (config.obstacle_size_min, config.obstacle_size_max),
            ),
            config,
            state: None,
            status: EpisodeStatus::Active,
            rng: StdRng::seed_from_u64(seed),
            cumulative_reward: 0.0,
        })
    }

    /// Starts a new episode.
    ///
    /// Places the agent at the origin, samples the waste and then the bin
    /// on distinct free cells, and regenerates the obstacles away from the
    /// waste cell. If `seed` is given the RNG is reseeded first.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::PlacementExhausted`] if no free cell is left for
    /// the waste or bin.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<(Observation, Info)> {
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        let grid_size = self.config.grid_size;

        let agent = GridPosition::origin();
        let waste = PositionSampler::sample(&mut self.rng, grid_size, &[agent])?;
        let bin = PositionSampler::sample(&mut self.rng, grid_size, &[agent, waste])?;

        let layout = self.obstacle_generator.generate(
            &mut self.rng,
            self.config.effective_obstacle_count(),
            grid_size,
            waste,
        );
        if layout.is_degraded() {
            warn!(
                placed = layout.obstacles.len(),
                requested = layout.requested,
                attempts = layout.attempts,
                "obstacle placement ran out of attempts"
            );
        }

        let state = EpisodeState {
            agent_position: agent,
            waste_position: waste,
            bin_position: bin,
            carrying: false,
            obstacles: layout.obstacles,
            step_count: 0,
            max_steps: self.config.max_steps,
            grid_size,
        };
        debug!(
            %waste,
            %bin,
            obstacles = state.obstacles.len(),
            "episode reset"
        );

        let observation = Observation::from_state(&state);
        self.state = Some(state);
        self.status = EpisodeStatus::Active;
        self.cumulative_reward = 0.0;
        Ok((observation, Info::new()))
    }

    /// Executes one step given a discrete action index.
    ///
    /// # Errors
    ///
    /// - [`EnvError::InvalidAction`] if `action` is not in `0..=4`.
    /// - [`EnvError::NotReset`] if no episode has been started.
    /// - [`EnvError::EpisodeOver`] if the episode already terminated or
    ///   truncated.
    ///
    /// No state is mutated when an error is returned.
    pub fn step(&mut self, action: usize) -> Result<StepResult> {
        let action = Action::try_from(action)?;
        self.step_action(action)
    }

    /// Executes one step with a typed action.
    ///
    /// Follows the loop:
    /// 1. Increment the step counter
    /// 2. Move (clamped to the grid) or interact
    /// 3. Check collision with obstacles
    /// 4. Check the step budget
    /// 5. Compute the reward
    pub fn step_action(&mut self, action: Action) -> Result<StepResult> {
        let prev = self.state.as_ref().ok_or(EnvError::NotReset)?;
        if !self.status.is_active() {
            return Err(EnvError::EpisodeOver);
        }

        let next = Self::advance(prev, action);
        let transition = Transition::new(prev, action, &next);
        let breakdown = self.reward_model.compute(&transition);
        let status = transition.status();
        let reward = breakdown.total();

        trace!(step = next.step_count, %action, reward, "step");
        match status {
            EpisodeStatus::Terminated(TerminationReason::Collision) => {
                debug!(position = %next.agent_position, step = next.step_count, "collision with obstacle");
            }
            EpisodeStatus::Terminated(TerminationReason::Delivered) => {
                debug!(step = next.step_count, "waste delivered");
            }
            EpisodeStatus::Truncated => {
                debug!(step = next.step_count, "step budget exhausted");
            }
            EpisodeStatus::Active => {}
        }

        let observation = Observation::from_state(&next);
        self.state = Some(next);
        self.status = status;
        self.cumulative_reward += reward;

        Ok(StepResult {
            observation,
            reward,
            terminated: status.is_terminated(),
            truncated: status.is_truncated(),
            info: Info::new(),
            status,
            breakdown,
        })
    }

    /// Applies the movement or interaction of `action` to a copy of `prev`.
    fn advance(prev: &EpisodeState, action: Action) -> EpisodeState {
        let mut next = prev.clone();
        next.step_count += 1;

        match action.delta() {
            Some((dx, dz)) => {
                next.agent_position = prev.agent_position.offset_clamped(dx, dz, prev.grid_size);
            }
            None if !prev.carrying => {
                if prev.agent_position == prev.waste_position {
                    next.carrying = true;
                }
            }
            None => {
                if prev.agent_position == prev.bin_position {
                    next.carrying = false;
                    next.waste_position = prev.bin_position;
                }
            }
        }

        next
    }

    /// Returns the current episode state, if an episode has been started.
    pub fn state(&self) -> Option<&EpisodeState> {
        self.state.as_ref()
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        self.state.as_ref().map(EpisodeState::snapshot)
    }

    /// Observation of the current state, if an episode has been started.
    pub fn observation(&self) -> Option<Observation> {
        self.state.as_ref().map(Observation::from_state)
    }

    pub fn status(&self) -> EpisodeStatus {
        self.status
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Replaces the episode state and marks it active.
    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: EpisodeState) {
        self.state = Some(state);
        self.status = EpisodeStatus::Active;
        self.cumulative_reward = 0.0;
    }
}

impl Environment for WasteCollectionEnv {
    fn reset(&mut self, seed: Option<u64>) -> Result<(Observation, Info)> {
        WasteCollectionEnv::reset(self, seed)
    }

    fn step(&mut self, action: usize) -> Result<StepResult> {
        WasteCollectionEnv::step(self, action)
    }

    fn action_space(&self) -> ActionSpace {
        ActionSpace::default()
    }

    fn observation_space(&self) -> ObservationSpace {
        ObservationSpace {
            grid_size: self.config.grid_size,
            axes: self.config.axis_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_env() -> WasteCollectionEnv {
        WasteCollectionEnv::new(EnvConfig::default(), 42).unwrap()
    }

    #[test]
    fn invalid_config_rejected() {
        let config = EnvConfig {
            grid_size: 1,
            ..EnvConfig::default()
        };
        assert!(matches!(
            WasteCollectionEnv::new(config, 0),
            Err(EnvError::InvalidConfig(_))
        ));
    }

    #[test]
    fn reset_returns_observation_and_empty_info() {
        let mut env = make_env();
        let (obs, info) = env.reset(None).unwrap();
        assert_eq!(obs.agent, GridPosition::origin());
        assert_eq!(obs.carrying, 0);
        assert!(info.is_empty());
        assert!(env.observation_space().contains(&obs));
    }

    #[test]
    fn step_before_reset_fails() {
        let mut env = make_env();
        assert_eq!(env.step(0), Err(EnvError::NotReset));
    }

    #[test]
    fn step_returns_valid_result() {
        let mut env = make_env();
        env.reset(Some(1)).unwrap();
        let result = env.step(Action::MoveRight.index()).unwrap();
        assert_eq!(env.state().unwrap().step_count, 1);
        assert!(result.info.is_empty());
        assert!((result.reward - result.breakdown.total()).abs() < 1e-12);
    }

    #[test]
    fn invalid_action_leaves_state_untouched() {
        let mut env = make_env();
        env.reset(Some(3)).unwrap();
        let before = env.state().cloned();
        assert_eq!(env.step(5), Err(EnvError::InvalidAction(5)));
        assert_eq!(env.step(usize::MAX), Err(EnvError::InvalidAction(usize::MAX)));
        assert_eq!(env.state().cloned(), before);
    }

    #[test]
    fn trait_object_usable() {
        let mut env = make_env();
        let dyn_env: &mut dyn Environment = &mut env;
        dyn_env.reset(Some(9)).unwrap();
        assert_eq!(dyn_env.action_space().n, 5);
        assert!(dyn_env.step(4).is_ok());
    }

    #[test]
    fn snapshot_available_after_reset() {
        let mut env = make_env();
        assert!(env.snapshot().is_none());
        env.reset(None).unwrap();
        let snap = env.snapshot().unwrap();
        assert_eq!(snap.grid_size, 10);
        assert_eq!(snap.agent_position, GridPosition::origin());
    }
}
