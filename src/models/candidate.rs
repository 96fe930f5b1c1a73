use rand::Rng;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::instrument;

pub type Field = i32;

pub const DAY_RANGE: std::ops::RangeInclusive<Field> = 1..=31;
pub const MONTH_RANGE: std::ops::RangeInclusive<Field> = 1..=12;
pub const YEAR_RANGE: std::ops::RangeInclusive<Field> = 0..=9999;

/// A (day, month, year) triple under search.
///
/// Candidates carry no validity of their own and may well describe dates that do
/// not exist. Operators never modify a candidate, they produce a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateCandidate {
    pub day: Field,
    pub month: Field,
    pub year: Field,
}

impl DateCandidate {
    pub const fn new(day: Field, month: Field, year: Field) -> Self {
        Self { day, month, year }
    }

    /// Samples every field uniformly from its range, with no validity filtering.
    #[instrument(level = "trace", skip(rng))]
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            day: rng.random_range(DAY_RANGE),
            month: rng.random_range(MONTH_RANGE),
            year: rng.random_range(YEAR_RANGE),
        }
    }

    /// The fields in crossover order: day, month, year.
    pub const fn genome(&self) -> [Field; 3] {
        [self.day, self.month, self.year]
    }

    pub const fn from_genome(genome: [Field; 3]) -> Self {
        let [day, month, year] = genome;
        Self { day, month, year }
    }

    pub fn formatted(&self) -> FormattedDate {
        FormattedDate::from(*self)
    }
}

impl fmt::Display for DateCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseDateError {
    #[error("expected DD/MM/YYYY, got {0:?}")]
    Shape(String),
    #[error("non-numeric field {field:?} in {input:?}")]
    Numeric { input: String, field: String },
    #[error("{input:?} is not canonical, expected {canonical:?}")]
    NonCanonical { input: String, canonical: String },
}

/// Canonical `DD/MM/YYYY` identity of a candidate, used for deduplication.
///
/// Equality, hashing and ordering only consider the key text. The candidate is
/// kept alongside so categories can be re-derived without reparsing.
#[derive(Debug, Clone)]
pub struct FormattedDate {
    key: String,
    candidate: DateCandidate,
}

impl FormattedDate {
    pub fn as_str(&self) -> &str {
        &self.key
    }

    pub fn candidate(&self) -> DateCandidate {
        self.candidate
    }
}

impl From<DateCandidate> for FormattedDate {
    fn from(candidate: DateCandidate) -> Self {
        Self {
            key: candidate.to_string(),
            candidate,
        }
    }
}

impl FromStr for FormattedDate {
    type Err = ParseDateError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = input.split('/').collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(ParseDateError::Shape(input.to_string()));
        };

        let parse = |field: &str| {
            field.parse::<Field>().map_err(|_| ParseDateError::Numeric {
                input: input.to_string(),
                field: field.to_string(),
            })
        };

        let formatted = Self::from(DateCandidate::new(parse(day)?, parse(month)?, parse(year)?));
        if formatted.key != input {
            return Err(ParseDateError::NonCanonical {
                input: input.to_string(),
                canonical: formatted.key,
            });
        }

        Ok(formatted)
    }
}

impl fmt::Display for FormattedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl PartialEq for FormattedDate {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FormattedDate {}

impl Hash for FormattedDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for FormattedDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FormattedDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl Serialize for FormattedDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn it_formats_with_zero_padding() {
        assert_eq!(DateCandidate::new(1, 2, 3).formatted().as_str(), "01/02/0003");
        assert_eq!(DateCandidate::new(31, 12, 9999).to_string(), "31/12/9999");
    }

    #[test]
    fn it_maps_equal_candidates_to_equal_keys() {
        let a = DateCandidate::new(29, 2, 2020).formatted();
        let b = DateCandidate::new(29, 2, 2020).formatted();
        let c = DateCandidate::new(28, 2, 2020).formatted();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn it_parses_canonical_dates() {
        let parsed: FormattedDate = "28/02/2100".parse().unwrap();
        assert_eq!(parsed.candidate(), DateCandidate::new(28, 2, 2100));
        assert_eq!(parsed.as_str(), "28/02/2100");
    }

    #[test]
    fn it_rejects_malformed_dates() {
        assert!(matches!(
            "28-02-2100".parse::<FormattedDate>(),
            Err(ParseDateError::Shape(_))
        ));
        assert!(matches!(
            "aa/02/2100".parse::<FormattedDate>(),
            Err(ParseDateError::Numeric { .. })
        ));
        assert!(matches!(
            "1/2/2100".parse::<FormattedDate>(),
            Err(ParseDateError::NonCanonical { .. })
        ));
    }

    #[test]
    fn it_samples_fields_within_their_ranges() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let candidate = DateCandidate::random(&mut rng);
            assert!(DAY_RANGE.contains(&candidate.day));
            assert!(MONTH_RANGE.contains(&candidate.month));
            assert!(YEAR_RANGE.contains(&candidate.year));
        }
    }

    #[test]
    fn it_orders_formatted_dates_by_key() {
        let earlier = DateCandidate::new(1, 1, 2000).formatted();
        let later = DateCandidate::new(2, 1, 1000).formatted();
        assert!(earlier < later);
    }

    #[test]
    fn it_serializes_formatted_dates_as_strings() {
        let json = serde_json::to_string(&DateCandidate::new(1, 1, 0).formatted()).unwrap();
        assert_eq!(json, "\"01/01/0000\"");
    }
}
