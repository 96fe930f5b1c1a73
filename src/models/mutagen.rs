use crate::models::{DateCandidate, Field, YEAR_RANGE};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

const YEAR_OFFSETS: [Field; 7] = [-400, -100, -4, 0, 4, 100, 400];

fn mutate_day<R: Rng>(rng: &mut R, day: Field) -> Field {
    let choices = [1, day, 28, 29, 30, 31];
    choices[rng.random_range(0..choices.len())]
}

fn mutate_month<R: Rng>(rng: &mut R, month: Field) -> Field {
    let choices = [1, month, 2, 6, 12];
    choices[rng.random_range(0..choices.len())]
}

fn mutate_year<R: Rng>(rng: &mut R, year: Field) -> Field {
    let offset = YEAR_OFFSETS[rng.random_range(0..YEAR_OFFSETS.len())];
    year.saturating_add(offset)
        .clamp(*YEAR_RANGE.start(), *YEAR_RANGE.end())
}

// ============================================================
// MutationRate
// ============================================================
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct MutationRate(f64);

#[derive(Debug, thiserror::Error)]
#[error("mutation_rate must be between 0.0 and 1.0, got: {0}")]
pub struct MutationRateOutOfRange(f64);

impl MutationRate {
    pub fn new(value: f64) -> Result<Self, MutationRateOutOfRange> {
        if !(0.0..=1.0).contains(&value) {
            return Err(MutationRateOutOfRange(value));
        }

        Ok(Self(value))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Default for MutationRate {
    fn default() -> Self {
        Self(0.15)
    }
}

// ============================================================
// Mutagen
// ============================================================

/// Independent per-field perturbation biased toward calendar boundaries.
///
/// Each field is replaced with probability `mutation_rate`:
/// the day by one of `{1, day, 28, 29, 30, 31}`, the month by one of
/// `{1, month, 2, 6, 12}`, and the year is shifted by one of
/// `{-400, -100, -4, 0, 4, 100, 400}` and clamped into `[0, 9999]`. The current
/// value is among the choices, so a selected field may come out unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Mutagen {
    mutation_rate: MutationRate,
}

impl Mutagen {
    pub fn new(mutation_rate: MutationRate) -> Self {
        Self { mutation_rate }
    }

    pub fn constant(mutation_rate_value: f64) -> Result<Self, MutationRateOutOfRange> {
        Ok(Self::new(MutationRate::new(mutation_rate_value)?))
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate.get()
    }

    #[instrument(level = "trace", skip(self, rng), fields(candidate = %candidate))]
    pub(crate) fn mutate<R: Rng>(&self, rng: &mut R, candidate: DateCandidate) -> DateCandidate {
        let rate = self.mutation_rate.get();
        let mut day = candidate.day;
        let mut month = candidate.month;
        let mut year = candidate.year;

        if rng.random_range(0.0..1.0) < rate {
            day = mutate_day(rng, day);
        }

        if rng.random_range(0.0..1.0) < rate {
            month = mutate_month(rng, month);
        }

        if rng.random_range(0.0..1.0) < rate {
            year = mutate_year(rng, year);
        }

        DateCandidate::new(day, month, year)
    }
}
