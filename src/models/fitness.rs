use crate::models::{CategoryCounts, DateCandidate, FormattedDate};
use crate::oracle::DateOracle;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::instrument;

/// Every date recorded so far during a run. Members are never removed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiscoveredSet(BTreeSet<FormattedDate>);

impl DiscoveredSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded<I: IntoIterator<Item = FormattedDate>>(dates: I) -> Self {
        Self(dates.into_iter().collect())
    }

    pub fn contains(&self, date: &FormattedDate) -> bool {
        self.0.contains(date)
    }

    pub(crate) fn insert(&mut self, date: FormattedDate) -> bool {
        self.0.insert(date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormattedDate> {
        self.0.iter()
    }
}

/// Scores a candidate by novelty and category scarcity.
///
/// A date already in `discovered` scores 0 and leaves all state untouched.
/// Otherwise its category count is incremented, the date is recorded, and the
/// score is the category's base weight divided by `1 + count`, so every further
/// discovery in the same category is worth less than the one before it.
#[instrument(level = "trace", skip(oracle, discovered, counts), fields(candidate = %candidate))]
pub fn evaluate(
    oracle: &dyn DateOracle,
    candidate: &DateCandidate,
    discovered: &mut DiscoveredSet,
    counts: &mut CategoryCounts,
) -> f64 {
    let formatted = candidate.formatted();
    if discovered.contains(&formatted) {
        return 0.0;
    }

    let category = oracle.category_of(candidate);
    let count = counts.record(category);
    let fitness = category.base_weight() / (1.0 + f64::from(count));

    discovered.insert(formatted);
    fitness
}

/// Evaluates a whole generation as a left fold in pool order.
///
/// The order matters: earlier candidates claim the higher scarcity scores of a
/// category, so this must never be reordered or run in parallel.
#[instrument(level = "debug", skip_all, fields(population_size = candidates.len()))]
pub fn evaluate_all(
    oracle: &dyn DateOracle,
    candidates: &[DateCandidate],
    discovered: &mut DiscoveredSet,
    counts: &mut CategoryCounts,
) -> Vec<f64> {
    candidates
        .iter()
        .map(|candidate| evaluate(oracle, candidate, discovered, counts))
        .collect()
}
