use crate::models::{DateCandidate, Field};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

const GENOME_LENGTH: usize = 3;

/// Performs single-point crossover at the specified cut point.
fn crossover_single_point(lhs: &DateCandidate, rhs: &DateCandidate, point: usize) -> DateCandidate {
    let mut genome: [Field; GENOME_LENGTH] = rhs.genome();
    let lhs_genome = lhs.genome();

    genome[..point].copy_from_slice(&lhs_genome[..point]); // First part from lhs
    DateCandidate::from_genome(genome)
}

/// Recombination of two parent candidates.
///
/// The genome is `[day, month, year]`. A cut point is drawn uniformly from
/// `{0, 1, 2}`; the child takes the first parent's fields before the cut and
/// the second parent's from the cut onward.
///
/// - point 0: the second parent verbatim
/// - point 1: day from the first parent, month and year from the second
/// - point 2: day and month from the first parent, year from the second
///
/// The cut never reaches 3, so the year always comes from the second parent.
///
/// ```rust
/// use date_case_ga::models::Crossover;
///
/// let crossover = Crossover::single_point();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub enum Crossover {
    #[default]
    SinglePoint,
}

impl Crossover {
    pub fn single_point() -> Self {
        Self::SinglePoint
    }

    /// Applies the crossover operation to two parents, producing a new candidate.
    #[instrument(level = "trace", skip(self, rng), fields(lhs = %lhs, rhs = %rhs))]
    pub(crate) fn apply<R: Rng>(
        &self,
        rng: &mut R,
        lhs: &DateCandidate,
        rhs: &DateCandidate,
    ) -> DateCandidate {
        match self {
            Self::SinglePoint => {
                let point = rng.random_range(0..GENOME_LENGTH); // Cut point
                crossover_single_point(lhs, rhs, point)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn it_performs_single_point_crossover() {
        let parent_a = DateCandidate::new(1, 1, 100);
        let parent_b = DateCandidate::new(31, 12, 200);

        let child = crossover_single_point(&parent_a, &parent_b, 0);
        assert_eq!(child, DateCandidate::new(31, 12, 200));

        let child = crossover_single_point(&parent_a, &parent_b, 1);
        assert_eq!(child, DateCandidate::new(1, 12, 200));

        let child = crossover_single_point(&parent_a, &parent_b, 2);
        assert_eq!(child, DateCandidate::new(1, 1, 200));
    }

    #[test]
    fn it_always_takes_the_year_from_the_second_parent() {
        let mut rng = StdRng::seed_from_u64(42);
        let parent_a = DateCandidate::new(1, 1, 100);
        let parent_b = DateCandidate::new(31, 12, 200);
        let crossover = Crossover::single_point();

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let child = crossover.apply(&mut rng, &parent_a, &parent_b);
            assert_eq!(child.year, 200);
            seen.insert(child);
        }

        // All three cut points show up
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn it_clones_when_parents_match() {
        let mut rng = StdRng::seed_from_u64(42);
        let parent = DateCandidate::new(29, 2, 2020);

        let child = Crossover::SinglePoint.apply(&mut rng, &parent, &parent);
        assert_eq!(child, parent);
    }
}
