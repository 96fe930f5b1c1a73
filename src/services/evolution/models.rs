use crate::models::{CategoryCounts, DateCandidate, FormattedDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hand-picked boundary dates, seeded as discovered before the first cycle.
pub const EDGE_CASES: [DateCandidate; 10] = [
    DateCandidate::new(1, 1, 0),
    DateCandidate::new(31, 12, 9999),
    DateCandidate::new(29, 2, 2020),
    DateCandidate::new(28, 2, 2100),
    DateCandidate::new(29, 2, 2000),
    DateCandidate::new(31, 1, 2023),
    DateCandidate::new(30, 4, 2023),
    DateCandidate::new(28, 2, 2023),
    DateCandidate::new(31, 12, 1999),
    DateCandidate::new(1, 1, 2000),
];

pub fn edge_cases() -> Vec<FormattedDate> {
    EDGE_CASES.iter().copied().map(FormattedDate::from).collect()
}

/// Which side of the oracle a date falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Partition {
    Valid,
    Invalid,
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Valid => f.write_str("Valid"),
            Partition::Invalid => f.write_str("Invalid"),
        }
    }
}

/// Minimum sizes of the final valid and invalid lists.
///
/// When the search did not discover enough of either, fresh uniform draws top
/// the list up. `max_attempts` caps the draws per list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Padding {
    pub min_valid: usize,
    pub min_invalid: usize,
    pub max_attempts: usize,
}

#[derive(Debug, thiserror::Error)]
#[error("max_attempts must be at least 1")]
pub struct PaddingError;

impl Padding {
    pub fn new(
        min_valid: usize,
        min_invalid: usize,
        max_attempts: usize,
    ) -> Result<Self, PaddingError> {
        if max_attempts == 0 {
            return Err(PaddingError);
        }

        Ok(Self {
            min_valid,
            min_invalid,
            max_attempts,
        })
    }

    pub(crate) fn minimum(&self, partition: Partition) -> usize {
        match partition {
            Partition::Valid => self.min_valid,
            Partition::Invalid => self.min_invalid,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            min_valid: 10,
            min_invalid: 10,
            max_attempts: 1_000_000,
        }
    }
}

/// Everything a finished run hands to its consumers.
#[derive(Debug, Clone, Serialize)]
pub struct EvolutionOutcome {
    /// Distinct valid dates, discovered ones first, then any padding.
    pub valid: Vec<FormattedDate>,
    /// Distinct invalid dates, discovered ones first, then any padding.
    pub invalid: Vec<FormattedDate>,
    /// The fixed boundary set, in declaration order.
    pub edge_cases: Vec<FormattedDate>,
    /// Size of the discovered set recorded once per cycle.
    pub coverage_history: Vec<usize>,
    /// Per-category tally of discoveries made during the search.
    pub category_counts: CategoryCounts,
    /// Size of the discovered set at the end of the search.
    pub discovered: usize,
}

impl EvolutionOutcome {
    /// Valid, invalid and boundary dates, in that order.
    pub fn all_dates(&self) -> impl Iterator<Item = &FormattedDate> {
        self.valid
            .iter()
            .chain(self.invalid.iter())
            .chain(self.edge_cases.iter())
    }

    pub fn generations(&self) -> usize {
        self.coverage_history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_formats_the_edge_cases() {
        let formatted: Vec<String> = edge_cases().iter().map(|d| d.to_string()).collect();

        assert_eq!(
            formatted,
            vec![
                "01/01/0000",
                "31/12/9999",
                "29/02/2020",
                "28/02/2100",
                "29/02/2000",
                "31/01/2023",
                "30/04/2023",
                "28/02/2023",
                "31/12/1999",
                "01/01/2000",
            ]
        );
    }

    #[test]
    fn it_rejects_zero_padding_attempts() {
        assert!(Padding::new(10, 10, 0).is_err());
        assert_eq!(Padding::new(10, 10, 1_000_000).unwrap(), Padding::default());
    }
}
