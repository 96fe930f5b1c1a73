mod breeder;
mod candidate;
mod category;
mod crossover;
mod distribution;
mod fitness;
mod mutagen;
mod population;
mod schedule;
mod selector;

pub use candidate::{
    DAY_RANGE, DateCandidate, Field, FormattedDate, MONTH_RANGE, ParseDateError, YEAR_RANGE,
};
pub use category::{Category, CategoryCounts};
pub use crossover::Crossover;
pub use distribution::Distribution;
pub use fitness::{DiscoveredSet, evaluate, evaluate_all};
pub use mutagen::{Mutagen, MutationRate, MutationRateOutOfRange};
pub use population::Population;
pub use schedule::{Schedule, ScheduleError};
pub use selector::{SelectionError, Selector};

pub(crate) use breeder::Breeder;
