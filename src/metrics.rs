//! Evaluation metrics for the waste-collection environment.
//!
//! Runs a policy for a number of episodes and aggregates per-episode
//! reward, length and outcome.

use std::fmt;

use tracing::debug;

use crate::env::{EnvError, Environment, EpisodeStatus, TerminationReason};
use crate::policy::Policy;

/// Statistics for one finished episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeStats {
    pub total_reward: f64,
    pub steps: u32,
    /// Terminal status of the episode.
    pub outcome: EpisodeStatus,
}

impl EpisodeStats {
    /// Mean reward per step.
    pub fn reward_per_step(&self) -> f64 {
        if self.steps > 0 {
            self.total_reward / f64::from(self.steps)
        } else {
            0.0
        }
    }
}

/// Aggregated evaluation metrics over multiple episodes.
#[derive(Debug, Clone)]
pub struct EvaluationMetrics {
    /// Mean total reward per episode.
    pub mean_reward: f64,
    /// Mean episode length in steps.
    pub mean_steps: f64,
    /// Mean of per-episode reward-per-step.
    pub mean_reward_per_step: f64,
    /// Fraction of episodes ending in a delivery.
    pub success_rate: f64,
    /// Fraction of episodes ending in a collision.
    pub collision_rate: f64,
    /// Fraction of episodes truncated by the step budget.
    pub truncation_rate: f64,
    /// Number of episodes evaluated.
    pub n_episodes: usize,
    /// Per-episode statistics, in run order.
    pub episodes: Vec<EpisodeStats>,
}

impl EvaluationMetrics {
    /// Evaluates a policy over multiple episodes and returns aggregated metrics.
    ///
    /// # Arguments
    ///
    /// * `env` - The environment to evaluate in
    /// * `policy` - The policy to evaluate
    /// * `n_episodes` - Number of episodes to run
    ///
    /// # Errors
    ///
    /// Propagates environment errors from `reset` or `step`.
    pub fn evaluate<E: Environment + ?Sized>(
        env: &mut E,
        policy: &mut dyn Policy,
        n_episodes: usize,
    ) -> Result<Self, EnvError> {
        let mut episodes = Vec::with_capacity(n_episodes);

        for episode in 0..n_episodes {
            let (mut obs, _) = env.reset(None)?;
            let mut total_reward = 0.0;
            let mut steps = 0u32;

            let outcome = loop {
                let action = policy.select_action(&obs);
                let result = env.step(action.index())?;
                total_reward += result.reward;
                steps += 1;
                obs = result.observation;
                if result.done() {
                    break result.status;
                }
            };

            let stats = EpisodeStats {
                total_reward,
                steps,
                outcome,
            };
            debug!(
                episode = episode + 1,
                total_reward,
                steps,
                reward_per_step = stats.reward_per_step(),
                %outcome,
                "episode finished"
            );
            episodes.push(stats);
        }

        Ok(Self::from_episodes(episodes))
    }

    /// Aggregates already collected episode statistics.
    pub fn from_episodes(episodes: Vec<EpisodeStats>) -> Self {
        let n_episodes = episodes.len();

        Self {
            mean_reward: mean_of(&episodes, |s| s.total_reward),
            mean_steps: mean_of(&episodes, |s| f64::from(s.steps)),
            mean_reward_per_step: mean_of(&episodes, EpisodeStats::reward_per_step),
            success_rate: rate_of(&episodes, |o| {
                *o == EpisodeStatus::Terminated(TerminationReason::Delivered)
            }),
            collision_rate: rate_of(&episodes, |o| {
                *o == EpisodeStatus::Terminated(TerminationReason::Collision)
            }),
            truncation_rate: rate_of(&episodes, EpisodeStatus::is_truncated),
            n_episodes,
            episodes,
        }
    }
}

fn mean_of(episodes: &[EpisodeStats], f: impl Fn(&EpisodeStats) -> f64) -> f64 {
    if episodes.is_empty() {
        return 0.0;
    }
    episodes.iter().map(f).sum::<f64>() / episodes.len() as f64
}

fn rate_of(episodes: &[EpisodeStats], pred: impl Fn(&EpisodeStatus) -> bool) -> f64 {
    mean_of(episodes, |s| if pred(&s.outcome) { 1.0 } else { 0.0 })
}

impl fmt::Display for EvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Evaluation Metrics ({} episodes) ===",
            self.n_episodes
        )?;
        writeln!(f, "  Mean total reward:       {:.2}", self.mean_reward)?;
        writeln!(f, "  Mean steps:              {:.1}", self.mean_steps)?;
        writeln!(
            f,
            "  Mean reward per step:    {:.2}",
            self.mean_reward_per_step
        )?;
        writeln!(
            f,
            "  Success rate:            {:.1}%",
            self.success_rate * 100.0
        )?;
        writeln!(
            f,
            "  Collision rate:          {:.1}%",
            self.collision_rate * 100.0
        )?;
        writeln!(
            f,
            "  Truncation rate:         {:.1}%",
            self.truncation_rate * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{EnvConfig, WasteCollectionEnv};
    use crate::policy::{GreedyPolicy, RandomPolicy};

    #[test]
    fn evaluate_completes() {
        let config = EnvConfig {
            max_steps: 20,
            ..EnvConfig::default()
        };
        let mut env = WasteCollectionEnv::new(config, 42).unwrap();
        let mut policy = RandomPolicy::new(1);
        let metrics = EvaluationMetrics::evaluate(&mut env, &mut policy, 3).unwrap();
        assert_eq!(metrics.n_episodes, 3);
        assert_eq!(metrics.episodes.len(), 3);
        assert!(metrics.episodes.iter().all(|e| e.steps <= 20));
        let total = metrics.success_rate + metrics.collision_rate + metrics.truncation_rate;
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn greedy_delivers_without_obstacles() {
        let config = EnvConfig {
            grid_size: 6,
            has_obstacles: false,
            ..EnvConfig::default()
        };
        let mut env = WasteCollectionEnv::new(config, 7).unwrap();
        let mut policy = GreedyPolicy::new();
        let metrics = EvaluationMetrics::evaluate(&mut env, &mut policy, 10).unwrap();
        assert_eq!(metrics.success_rate, 1.0);
        assert!(metrics.mean_reward > 25.0);
    }

    #[test]
    fn aggregates_outcomes() {
        let episodes = vec![
            EpisodeStats {
                total_reward: 30.0,
                steps: 10,
                outcome: EpisodeStatus::Terminated(TerminationReason::Delivered),
            },
            EpisodeStats {
                total_reward: -10.0,
                steps: 5,
                outcome: EpisodeStatus::Terminated(TerminationReason::Collision),
            },
        ];
        let metrics = EvaluationMetrics::from_episodes(episodes);
        assert_eq!(metrics.mean_reward, 10.0);
        assert_eq!(metrics.mean_steps, 7.5);
        assert_eq!(metrics.mean_reward_per_step, 0.5);
        assert_eq!(metrics.success_rate, 0.5);
        assert_eq!(metrics.collision_rate, 0.5);
        assert_eq!(metrics.truncation_rate, 0.0);
        assert!(metrics.to_string().contains("2 episodes"));
    }

    #[test]
    fn empty_run_has_zero_means() {
        let metrics = EvaluationMetrics::from_episodes(Vec::new());
        assert_eq!(metrics.n_episodes, 0);
        assert_eq!(metrics.mean_reward, 0.0);
    }
}
