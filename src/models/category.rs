use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Classification bucket assigned to a candidate by a date oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Leap Year")]
    LeapYear,
    February,
    #[serde(rename = "30-day Month")]
    ThirtyDayMonth,
    #[serde(rename = "31-day Month")]
    ThirtyOneDayMonth,
    Invalid,
}

impl Category {
    /// Every category, in reporting order.
    pub const ALL: [Category; 5] = [
        Category::LeapYear,
        Category::February,
        Category::ThirtyDayMonth,
        Category::ThirtyOneDayMonth,
        Category::Invalid,
    ];

    /// Base reward for discovering a date of this category.
    pub const fn base_weight(self) -> f64 {
        match self {
            Category::LeapYear => 3.0,
            Category::Invalid => 2.0,
            Category::February => 1.5,
            Category::ThirtyDayMonth | Category::ThirtyOneDayMonth => 1.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::LeapYear => "Leap Year",
            Category::February => "February",
            Category::ThirtyDayMonth => "30-day Month",
            Category::ThirtyOneDayMonth => "31-day Month",
            Category::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Number of distinct newly discovered dates seen per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts(BTreeMap<Category, u32>);

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> u32 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    /// Increments the count for `category` and returns the new value.
    pub(crate) fn record(&mut self, category: Category) -> u32 {
        let count = self.0.entry(category).or_insert(0);
        *count += 1;
        *count
    }

    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.0.iter().map(|(category, count)| (*category, *count))
    }
}
