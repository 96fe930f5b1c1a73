use crate::models::{Crossover, DateCandidate, Mutagen};
use rand::Rng;
use tracing::instrument;

pub(crate) struct Breeder<'a> {
    crossover: &'a Crossover,
    mutagen: &'a Mutagen,
}

impl<'a> Breeder<'a> {
    pub(crate) fn new(crossover: &'a Crossover, mutagen: &'a Mutagen) -> Self {
        Self { crossover, mutagen }
    }

    /// Recombination first, mutation second.
    fn breed_child<R: Rng>(
        &self,
        parent1: &DateCandidate,
        parent2: &DateCandidate,
        rng: &mut R,
    ) -> DateCandidate {
        let child = self.crossover.apply(rng, parent1, parent2);
        self.mutagen.mutate(rng, child)
    }

    /// Breeds `num_offspring` children.
    ///
    /// Both parents of every child are drawn uniformly, with replacement, from the
    /// breeding pool. Fitness weighting already happened when the pool was drawn
    /// and is not applied a second time here.
    #[instrument(level = "debug", skip(self, breeding_pool, rng), fields(breeding_pool_size = breeding_pool.len()))]
    pub(crate) fn breed_batch<R: Rng>(
        &self,
        breeding_pool: &[DateCandidate],
        num_offspring: usize,
        rng: &mut R,
    ) -> Vec<DateCandidate> {
        if breeding_pool.is_empty() {
            return Vec::new();
        }

        (0..num_offspring)
            .map(|_| {
                let parent1 = breeding_pool[rng.random_range(0..breeding_pool.len())];
                let parent2 = breeding_pool[rng.random_range(0..breeding_pool.len())];
                self.breed_child(&parent1, &parent2, rng)
            })
            .collect()
    }
}
