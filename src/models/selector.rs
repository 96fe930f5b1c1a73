//! Fitness-proportionate selection of the breeding pool.
//!
//! Each cycle the evolution service halves the population into a breeding pool
//! by spinning a roulette wheel: every slot is drawn independently, with
//! replacement, and a candidate's chance of landing in a slot is its share of
//! the total fitness. Duplicates are expected.
//!
//! When every candidate scored zero (all rediscoveries) there is nothing to be
//! proportional to, and the wheel falls back to equal-width segments.
//!
//! ```rust
//! use date_case_ga::models::Selector;
//!
//! // Breeding pool of 50 drawn from a population of 100
//! let selector = Selector::roulette(50);
//! assert_eq!(selector.breeding_pool_size(), 50);
//! ```

use crate::models::DateCandidate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Performs a single roulette wheel spin to select a candidate index.
///
/// `offset` is added to every weight, so with all-zero weights and `offset = 1.0`
/// the wheel is uniform over the candidates.
fn spin_roulette<R: Rng>(
    weights: &[f64],
    total_weight: f64,
    offset: f64,
    rng: &mut R,
) -> Result<usize, SelectionError> {
    let spin = rng.random_range(0.0..total_weight);
    let mut cumulative = 0.0;

    for (index, weight) in weights.iter().enumerate() {
        cumulative += weight + offset;
        if cumulative > spin {
            return Ok(index);
        }
    }

    // Unreachable while total_weight is the same sum the loop accumulates
    Err(SelectionError::RouletteSelectionFailed)
}


/// Errors that can occur while drawing the breeding pool.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum SelectionError {
    /// The population is empty, there is nothing to select from.
    #[error("No candidates available for selection")]
    NoCandidates,

    /// One fitness score per candidate is required.
    #[error("Fitness length mismatch: {candidates} candidates, {scores} scores")]
    FitnessLengthMismatch { candidates: usize, scores: usize },

    /// A score was negative or not a finite number.
    #[error("Invalid fitness for roulette selection: {0}")]
    InvalidFitnessForRoulette(f64),

    /// Internal roulette wheel algorithm failure.
    #[error("Internal error: roulette wheel failed to select candidate")]
    RouletteSelectionFailed,
}

/// Configuration for breeding-pool selection.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Selector {
    /// Number of candidates drawn into the breeding pool
    pub breeding_pool_size: usize,
}

impl Selector {
    /// Creates a roulette wheel selector drawing `breeding_pool_size` candidates.
    pub fn roulette(breeding_pool_size: usize) -> Self {
        Self { breeding_pool_size }
    }

    pub fn breeding_pool_size(&self) -> usize {
        self.breeding_pool_size
    }

    /// Draws the breeding pool, with replacement, proportionally to `fitness`.
    #[instrument(level = "debug", skip(self, rng, candidates, fitness), fields(breeding_pool_size = self.breeding_pool_size, num_candidates = candidates.len()))]
    pub(crate) fn select_breeding_pool<R: Rng>(
        &self,
        rng: &mut R,
        candidates: &[DateCandidate],
        fitness: &[f64],
    ) -> Result<Vec<DateCandidate>, SelectionError> {
        if candidates.is_empty() {
            return Err(SelectionError::NoCandidates);
        }

        if candidates.len() != fitness.len() {
            return Err(SelectionError::FitnessLengthMismatch {
                candidates: candidates.len(),
                scores: fitness.len(),
            });
        }

        if let Some(invalid) = fitness.iter().find(|f| !f.is_finite() || **f < 0.0) {
            return Err(SelectionError::InvalidFitnessForRoulette(*invalid));
        }

        let total_fitness: f64 = fitness.iter().sum();
        let (total_weight, offset) = if total_fitness > 0.0 {
            (total_fitness, 0.0)
        } else {
            tracing::warn!("All candidates scored zero, selecting uniformly");
            (candidates.len() as f64, 1.0)
        };

        (0..self.breeding_pool_size)
            .map(|_| {
                spin_roulette(fitness, total_weight, offset, rng).map(|index| candidates[index])
            })
            .collect()
    }
}

#[cfg(test)]
mod selector_tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn candidates(n: i32) -> Vec<DateCandidate> {
        (1..=n).map(|day| DateCandidate::new(day, 1, 2000)).collect()
    }

    #[test]
    fn it_draws_the_configured_pool_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = candidates(100);
        let fitness = vec![1.0; 100];

        let breeding_pool = Selector::roulette(50)
            .select_breeding_pool(&mut rng, &pool, &fitness)
            .unwrap();

        assert_eq!(breeding_pool.len(), 50);
        assert!(breeding_pool.iter().all(|c| pool.contains(c)));
    }

    #[test]
    fn it_only_draws_candidates_with_fitness() {
        let mut rng = StdRng::seed_from_u64(2);
        let pool = candidates(4);
        let fitness = vec![0.0, 0.0, 0.75, 0.0];

        let breeding_pool = Selector::roulette(20)
            .select_breeding_pool(&mut rng, &pool, &fitness)
            .unwrap();

        assert!(breeding_pool.iter().all(|c| *c == pool[2]));
    }

    #[test]
    fn it_falls_back_to_uniform_when_all_fitness_is_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = candidates(2);
        let fitness = vec![0.0, 0.0];

        let breeding_pool = Selector::roulette(1000)
            .select_breeding_pool(&mut rng, &pool, &fitness)
            .unwrap();

        let first = breeding_pool.iter().filter(|c| **c == pool[0]).count();
        assert!((first as f64 / 1000.0 - 0.5).abs() < 0.05);
    }

    #[test]
    fn it_rejects_empty_populations() {
        let mut rng = StdRng::seed_from_u64(4);
        let result = Selector::roulette(5).select_breeding_pool(&mut rng, &[], &[]);
        assert_eq!(result, Err(SelectionError::NoCandidates));
    }

    #[test]
    fn it_rejects_mismatched_fitness() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = Selector::roulette(5).select_breeding_pool(&mut rng, &candidates(3), &[1.0]);
        assert_eq!(
            result,
            Err(SelectionError::FitnessLengthMismatch {
                candidates: 3,
                scores: 1
            })
        );
    }

    #[test]
    fn it_rejects_negative_fitness() {
        let mut rng = StdRng::seed_from_u64(6);
        let result =
            Selector::roulette(5).select_breeding_pool(&mut rng, &candidates(2), &[1.0, -1.0]);
        assert_eq!(result, Err(SelectionError::InvalidFitnessForRoulette(-1.0)));
    }
}
