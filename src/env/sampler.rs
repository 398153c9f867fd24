//! Uniform grid-cell sampling with an exclusion set.

use std::collections::HashSet;

use rand::Rng;

use super::error::{EnvError, Result};
use super::types::GridPosition;

/// Draws uniformly random ground-plane cells.
pub struct PositionSampler;

impl PositionSampler {
    /// Samples a cell in `[0, grid_size - 1]²` that is not in `exclude`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::PlacementExhausted`] when the in-grid exclusions
    /// cover every cell, instead of looping forever.
    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        grid_size: i32,
        exclude: &[GridPosition],
    ) -> Result<GridPosition> {
        let blocked: HashSet<GridPosition> = exclude
            .iter()
            .copied()
            .filter(|p| p.in_bounds(grid_size))
            .collect();
        let cells = (grid_size.max(0) as usize).pow(2);
        if blocked.len() >= cells {
            return Err(EnvError::PlacementExhausted {
                grid_size,
                excluded: blocked.len(),
            });
        }

        loop {
            let candidate = Self::draw(rng, grid_size);
            if !blocked.contains(&candidate) {
                return Ok(candidate);
            }
        }
    }

    /// Draws one cell with no exclusion check. `grid_size` must be positive.
    pub(crate) fn draw<R: Rng + ?Sized>(rng: &mut R, grid_size: i32) -> GridPosition {
        GridPosition::new(rng.gen_range(0..grid_size), rng.gen_range(0..grid_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = PositionSampler::sample(&mut rng, 4, &[]).unwrap();
            assert!(p.in_bounds(4));
        }
    }

    #[test]
    fn never_returns_excluded_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let exclude = [GridPosition::new(0, 0), GridPosition::new(1, 0)];
        for _ in 0..200 {
            let p = PositionSampler::sample(&mut rng, 2, &exclude).unwrap();
            assert!(!exclude.contains(&p));
        }
    }

    #[test]
    fn last_free_cell_is_found() {
        let mut rng = StdRng::seed_from_u64(3);
        let exclude = [
            GridPosition::new(0, 0),
            GridPosition::new(0, 1),
            GridPosition::new(1, 0),
        ];
        let p = PositionSampler::sample(&mut rng, 2, &exclude).unwrap();
        assert_eq!(p, GridPosition::new(1, 1));
    }

    #[test]
    fn full_exclusion_fails() {
        let mut rng = StdRng::seed_from_u64(3);
        let exclude = [GridPosition::new(0, 0)];
        let err = PositionSampler::sample(&mut rng, 1, &exclude).unwrap_err();
        assert_eq!(
            err,
            EnvError::PlacementExhausted {
                grid_size: 1,
                excluded: 1
            }
        );
    }

    #[test]
    fn duplicate_and_out_of_grid_exclusions_ignored() {
        let mut rng = StdRng::seed_from_u64(5);
        let exclude = [
            GridPosition::new(0, 0),
            GridPosition::new(0, 0),
            GridPosition::HIDDEN,
            GridPosition::new(9, 9),
        ];
        let p = PositionSampler::sample(&mut rng, 2, &exclude).unwrap();
        assert_ne!(p, GridPosition::new(0, 0));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(
                PositionSampler::sample(&mut a, 10, &[]).unwrap(),
                PositionSampler::sample(&mut b, 10, &[]).unwrap()
            );
        }
    }
}
