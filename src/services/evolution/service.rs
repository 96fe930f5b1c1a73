use super::{Error, EvolutionOutcome, Padding, Partition, ServiceBuilder};
use crate::{
    models::{
        Breeder, CategoryCounts, Crossover, DateCandidate, DiscoveredSet, Distribution,
        FormattedDate, Mutagen, Population, Schedule, Selector, evaluate_all,
    },
    oracle::DateOracle,
};
use rand::Rng;
use std::collections::HashSet;
use tracing::instrument;

/// Search state threaded through the cycles of one run.
///
/// The discovered set and category counts are owned here and lent out by
/// exclusive borrow to the fitness evaluation of each cycle.
struct Search {
    population: Population,
    discovered: DiscoveredSet,
    counts: CategoryCounts,
    coverage_history: Vec<usize>,
}

/// Drives the evolution: seeding, a fixed number of cycles, then finalization.
///
/// All randomness comes from the RNG handed to [`Service::run`], so a seeded
/// generator replays the same run.
pub struct Service {
    pub(super) oracle: Box<dyn DateOracle + Send + Sync>,
    pub(super) schedule: Schedule,
    pub(super) crossover: Crossover,
    pub(super) mutagen: Mutagen,
    pub(super) padding: Padding,
    pub(super) edge_cases: Vec<FormattedDate>,
}

impl Service {
    pub fn builder() -> ServiceBuilder {
        ServiceBuilder::default()
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn edge_cases(&self) -> &[FormattedDate] {
        &self.edge_cases
    }

    pub fn oracle(&self) -> &dyn DateOracle {
        self.oracle.as_ref()
    }

    #[instrument(level = "info", skip(self, rng), fields(max_generations = self.schedule.max_generations, population_size = self.schedule.population_size, mutation_rate = self.mutagen.mutation_rate()))]
    pub fn run<R: Rng>(&self, rng: &mut R) -> Result<EvolutionOutcome, Error> {
        let mut search = self.seed(rng);

        for _ in 0..self.schedule.max_generations {
            search.population = self.run_cycle(&mut search, rng)?;
        }

        let outcome = self.finalize(search, rng)?;

        tracing::info!(
            discovered = outcome.discovered,
            valid = outcome.valid.len(),
            invalid = outcome.invalid.len(),
            "Evolution concluded"
        );

        Ok(outcome)
    }

    #[instrument(level = "debug", skip(self, rng))]
    fn seed<R: Rng>(&self, rng: &mut R) -> Search {
        tracing::debug!("Generating initial population");
        let candidates = Distribution::random(self.schedule.population_size).distribute(rng);

        Search {
            population: Population::new(0, candidates),
            discovered: DiscoveredSet::seeded(self.edge_cases.iter().cloned()),
            counts: CategoryCounts::new(),
            coverage_history: Vec::with_capacity(self.schedule.max_generations),
        }
    }

    /// Evaluates the current generation and breeds its replacement.
    #[instrument(level = "debug", skip(self, search, rng), fields(generation = search.population.generation()))]
    fn run_cycle<R: Rng>(&self, search: &mut Search, rng: &mut R) -> Result<Population, Error> {
        let discovered_before = search.discovered.len();

        let fitness = evaluate_all(
            self.oracle.as_ref(),
            search.population.candidates(),
            &mut search.discovered,
            &mut search.counts,
        );

        // Recorded after the evaluation pass, so it includes this cycle's discoveries
        search.coverage_history.push(search.discovered.len());

        let breeding_pool = Selector::roulette(self.schedule.breeding_pool_size())
            .select_breeding_pool(rng, search.population.candidates(), &fitness)?;

        let offspring = Breeder::new(&self.crossover, &self.mutagen).breed_batch(
            &breeding_pool,
            self.schedule.population_size,
            rng,
        );

        tracing::debug!(
            new_discoveries = search.discovered.len() - discovered_before,
            discovered = search.discovered.len(),
            "Cycle complete"
        );

        Ok(Population::new(search.population.generation() + 1, offspring))
    }

    #[instrument(level = "debug", skip_all, fields(discovered = search.discovered.len()))]
    fn finalize<R: Rng>(&self, search: Search, rng: &mut R) -> Result<EvolutionOutcome, Error> {
        let (mut valid, mut invalid): (Vec<FormattedDate>, Vec<FormattedDate>) = search
            .discovered
            .iter()
            .cloned()
            .partition(|date| self.oracle.is_valid(&date.candidate()));

        self.pad(&mut valid, Partition::Valid, rng)?;
        self.pad(&mut invalid, Partition::Invalid, rng)?;

        Ok(EvolutionOutcome {
            valid,
            invalid,
            edge_cases: self.edge_cases.clone(),
            coverage_history: search.coverage_history,
            category_counts: search.counts,
            discovered: search.discovered.len(),
        })
    }

    /// Tops `dates` up with fresh uniform draws until it reaches the minimum
    /// for `partition`. Padding entries are not added to the discovered set.
    #[instrument(level = "debug", skip(self, dates, rng), fields(found = dates.len()))]
    fn pad<R: Rng>(
        &self,
        dates: &mut Vec<FormattedDate>,
        partition: Partition,
        rng: &mut R,
    ) -> Result<(), Error> {
        let required = self.padding.minimum(partition);
        let wants_valid = partition == Partition::Valid;
        let mut seen: HashSet<FormattedDate> = dates.iter().cloned().collect();
        let mut attempts = 0;

        while dates.len() < required {
            if attempts >= self.padding.max_attempts {
                return Err(Error::PaddingExhausted {
                    partition,
                    found: dates.len(),
                    required,
                    attempts,
                });
            }
            attempts += 1;

            let candidate = DateCandidate::random(rng);
            if self.oracle.is_valid(&candidate) != wants_valid {
                continue;
            }

            let formatted = candidate.formatted();
            if seen.insert(formatted.clone()) {
                dates.push(formatted);
            }
        }

        if attempts > 0 {
            tracing::debug!(attempts, padded_to = dates.len(), "Padded {partition} dates");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::oracle::{Gregorian, is_valid};
    use rand::{SeedableRng, rngs::StdRng};

    struct NothingIsValid;

    impl DateOracle for NothingIsValid {
        fn is_valid(&self, _candidate: &DateCandidate) -> bool {
            false
        }

        fn category_of(&self, _candidate: &DateCandidate) -> Category {
            Category::Invalid
        }
    }

    fn small_service() -> Service {
        Service::builder()
            .with_schedule(Schedule::generational(5, 20).unwrap())
            .build()
    }

    #[test]
    fn it_seeds_the_discovered_set_with_edge_cases() {
        let service = small_service();
        let search = service.seed(&mut StdRng::seed_from_u64(1));

        assert_eq!(search.population.len(), 20);
        assert_eq!(search.discovered.len(), 10);
        assert!(search.coverage_history.is_empty());
        assert_eq!(search.counts.total(), 0);
    }

    #[test]
    fn it_replaces_the_population_each_cycle() {
        let service = small_service();
        let mut rng = StdRng::seed_from_u64(2);
        let mut search = service.seed(&mut rng);

        let next = service.run_cycle(&mut search, &mut rng).unwrap();

        assert_eq!(next.len(), 20);
        assert_eq!(next.generation(), 1);
        assert_eq!(search.coverage_history, vec![search.discovered.len()]);
    }

    #[test]
    fn it_records_coverage_after_evaluation() {
        let service = small_service();
        let mut rng = StdRng::seed_from_u64(3);
        let mut search = service.seed(&mut rng);

        service.run_cycle(&mut search, &mut rng).unwrap();

        // Fresh random dates are almost never edge cases, so the first sample
        // already exceeds the ten seeded dates.
        assert!(search.coverage_history[0] > 10);
    }

    #[test]
    fn it_pads_until_the_minimum_is_met() {
        let service = Service::builder()
            .with_padding(Padding::new(25, 25, 100_000).unwrap())
            .build();
        let mut rng = StdRng::seed_from_u64(4);
        let mut valid = Vec::new();

        service.pad(&mut valid, Partition::Valid, &mut rng).unwrap();

        assert_eq!(valid.len(), 25);
        assert_eq!(valid.iter().collect::<HashSet<_>>().len(), 25);
        assert!(valid.iter().all(|d| {
            let c = d.candidate();
            is_valid(c.day, c.month, c.year)
        }));
    }

    #[test]
    fn it_leaves_long_enough_lists_alone() {
        let service = small_service();
        let mut rng = StdRng::seed_from_u64(5);
        let mut invalid: Vec<FormattedDate> = (1..=12)
            .map(|month| DateCandidate::new(32, month, 2000).formatted())
            .collect();
        let before = invalid.clone();

        service.pad(&mut invalid, Partition::Invalid, &mut rng).unwrap();

        assert_eq!(invalid, before);
    }

    #[test]
    fn it_reports_exhausted_padding() {
        let service = Service::builder()
            .with_oracle(NothingIsValid)
            .with_padding(Padding::new(10, 10, 500).unwrap())
            .build();
        let mut rng = StdRng::seed_from_u64(6);

        let result = service.pad(&mut Vec::new(), Partition::Valid, &mut rng);

        assert!(matches!(
            result,
            Err(Error::PaddingExhausted {
                partition: Partition::Valid,
                found: 0,
                required: 10,
                attempts: 500,
            })
        ));
    }

    #[test]
    fn it_uses_the_gregorian_oracle_by_default() {
        let service = small_service();
        let candidate = DateCandidate::new(29, 2, 1900);

        assert_eq!(
            service.oracle().is_valid(&candidate),
            Gregorian.is_valid(&candidate)
        );
    }
}
