use crate::models::DateCandidate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How the initial population is laid out over the candidate space.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub enum Distribution {
    /// Every field drawn independently and uniformly, invalid dates included.
    Random { population_size: usize },
}

impl Distribution {
    pub fn random(population_size: usize) -> Self {
        Distribution::Random { population_size }
    }

    #[instrument(level = "debug", skip(rng), fields(distribution = ?self))]
    pub(crate) fn distribute<R: Rng>(&self, rng: &mut R) -> Vec<DateCandidate> {
        match self {
            Distribution::Random { population_size } => random_distribution(*population_size, rng),
        }
    }
}

fn random_distribution<R: Rng>(n_samples: usize, rng: &mut R) -> Vec<DateCandidate> {
    (0..n_samples).map(|_| DateCandidate::random(rng)).collect()
}
