//! Category coverage of a set of dates.
//!
//! Categories are re-derived through the oracle for every date rather than read
//! from anything the search recorded.

use crate::models::{Category, FormattedDate};
use crate::oracle::DateOracle;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryCoverage {
    pub category: Category,
    pub count: usize,
    /// Share of all analysed dates, 0 to 100.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub total: usize,
    /// One row per category, always all five, in [`Category::ALL`] order.
    pub categories: Vec<CategoryCoverage>,
}

impl CoverageReport {
    pub fn from_dates<'a, I>(oracle: &dyn DateOracle, dates: I) -> Self
    where
        I: IntoIterator<Item = &'a FormattedDate>,
    {
        let mut counts = [0usize; Category::ALL.len()];
        let mut total = 0;

        for date in dates {
            let category = oracle.category_of(&date.candidate());
            if let Some(index) = Category::ALL.iter().position(|c| *c == category) {
                counts[index] += 1;
            }
            total += 1;
        }

        let categories = Category::ALL
            .iter()
            .zip(counts)
            .map(|(category, count)| CategoryCoverage {
                category: *category,
                count,
                percentage: if total > 0 {
                    count as f64 / total as f64 * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        Self { total, categories }
    }

    pub fn get(&self, category: Category) -> Option<&CategoryCoverage> {
        self.categories.iter().find(|row| row.category == category)
    }
}
