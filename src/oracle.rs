//! Calendar rules that decide whether a candidate is a real date, and which
//! category it falls into.
//!
//! The rules are the proleptic Gregorian ones, without any model of calendar
//! reform: year 0 is in range and every year follows the same leap rule.

use crate::models::{Category, DateCandidate, Field};

const THIRTY_DAY_MONTHS: [Field; 4] = [4, 6, 9, 11];

pub fn is_leap_year(year: Field) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Total over every integer triple. Anything that is not a valid date is `false`.
pub fn is_valid(day: Field, month: Field, year: Field) -> bool {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return false;
    }

    match month {
        2 => day <= if is_leap_year(year) { 29 } else { 28 },
        m if THIRTY_DAY_MONTHS.contains(&m) => day <= 30,
        _ => true,
    }
}

pub fn category_of(day: Field, month: Field, year: Field) -> Category {
    if !is_valid(day, month, year) {
        return Category::Invalid;
    }

    match month {
        2 if is_leap_year(year) => Category::LeapYear,
        2 => Category::February,
        m if THIRTY_DAY_MONTHS.contains(&m) => Category::ThirtyDayMonth,
        _ => Category::ThirtyOneDayMonth,
    }
}

/// Validity predicate and classifier consumed by the search.
///
/// The evolution service only ever calls these two methods, so any pure rule set
/// can stand in for [`Gregorian`].
pub trait DateOracle {
    fn is_valid(&self, candidate: &DateCandidate) -> bool;
    fn category_of(&self, candidate: &DateCandidate) -> Category;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Gregorian;

impl DateOracle for Gregorian {
    fn is_valid(&self, candidate: &DateCandidate) -> bool {
        is_valid(candidate.day, candidate.month, candidate.year)
    }

    fn category_of(&self, candidate: &DateCandidate) -> Category {
        category_of(candidate.day, candidate.month, candidate.year)
    }
}
