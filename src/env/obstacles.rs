//! Procedural obstacle placement by rejection sampling.

use rand::Rng;

use super::sampler::PositionSampler;
use super::types::{GridPosition, Obstacle};

/// Result of an obstacle generation run.
///
/// May hold fewer than `requested` obstacles if the attempt budget ran out.
/// That is a valid, degraded layout rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleLayout {
    pub obstacles: Vec<Obstacle>,
    /// Number of obstacles asked for.
    pub requested: usize,
    /// Candidate draws consumed.
    pub attempts: usize,
}

impl ObstacleLayout {
    /// Returns true if fewer obstacles than requested were placed.
    pub fn is_degraded(&self) -> bool {
        self.obstacles.len() < self.requested
    }
}

/// Builds non-overlapping obstacle sets.
#[derive(Debug, Clone)]
pub struct ObstacleGenerator {
    /// Total candidate draws allowed per run.
    pub max_attempts: usize,
    /// Size range `[min, max)`.
    pub size_range: (f64, f64),
}

impl ObstacleGenerator {
    /// Default attempt budget.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

    /// Creates a generator with the given attempt budget and size range.
    pub fn new(max_attempts: usize, size_range: (f64, f64)) -> Self {
        Self {
            max_attempts,
            size_range,
        }
    }

    /// Places up to `count` obstacles on a `grid_size` grid.
    ///
    /// A candidate is rejected if it lands on `forbidden` or on an already
    /// accepted obstacle. Every draw, accepted or not, consumes one attempt.
    /// The size range must be non-empty (see [`super::EnvConfig::validate`]).
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        grid_size: i32,
        forbidden: GridPosition,
    ) -> ObstacleLayout {
        let mut obstacles: Vec<Obstacle> = Vec::with_capacity(count);
        let mut attempts = 0;

        while obstacles.len() < count && attempts < self.max_attempts {
            attempts += 1;
            let candidate = PositionSampler::draw(rng, grid_size);
            if candidate == forbidden || obstacles.iter().any(|o| o.position == candidate) {
                continue;
            }
            let size = rng.gen_range(self.size_range.0..self.size_range.1);
            obstacles.push(Obstacle::new(candidate, size));
        }

        ObstacleLayout {
            obstacles,
            requested: count,
            attempts,
        }
    }
}

impl Default for ObstacleGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, (1.2, 2.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_requested_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let waste = GridPosition::new(3, 3);
        let layout = ObstacleGenerator::default().generate(&mut rng, 3, 10, waste);
        assert_eq!(layout.obstacles.len(), 3);
        assert!(!layout.is_degraded());
    }

    #[test]
    fn obstacles_are_distinct_and_avoid_forbidden() {
        let mut rng = StdRng::seed_from_u64(1);
        let waste = GridPosition::new(1, 1);
        let layout = ObstacleGenerator::default().generate(&mut rng, 8, 3, waste);
        assert_eq!(layout.obstacles.len(), 8);
        for (i, a) in layout.obstacles.iter().enumerate() {
            assert_ne!(a.position, waste);
            assert!(a.position.in_bounds(3));
            for b in &layout.obstacles[i + 1..] {
                assert_ne!(a.position, b.position);
            }
        }
    }

    #[test]
    fn sizes_within_range() {
        let mut rng = StdRng::seed_from_u64(9);
        let layout =
            ObstacleGenerator::default().generate(&mut rng, 20, 10, GridPosition::origin());
        for o in &layout.obstacles {
            assert!(o.size >= 1.2 && o.size < 2.0, "size {} out of range", o.size);
        }
    }

    #[test]
    fn shortfall_is_not_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        // Only three free cells exist on a 2x2 grid with the waste excluded.
        let layout =
            ObstacleGenerator::default().generate(&mut rng, 5, 2, GridPosition::new(0, 0));
        assert_eq!(layout.obstacles.len(), 3);
        assert!(layout.is_degraded());
        assert_eq!(layout.attempts, ObstacleGenerator::DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn attempt_budget_caps_draws() {
        let mut rng = StdRng::seed_from_u64(0);
        let generator = ObstacleGenerator::new(2, (1.2, 2.0));
        let layout = generator.generate(&mut rng, 10, 10, GridPosition::origin());
        assert!(layout.obstacles.len() <= 2);
        assert_eq!(layout.attempts, 2);
    }

    #[test]
    fn zero_count_draws_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        let layout = ObstacleGenerator::default().generate(&mut rng, 0, 10, GridPosition::origin());
        assert!(layout.obstacles.is_empty());
        assert_eq!(layout.attempts, 0);
        assert!(!layout.is_degraded());
    }
}
