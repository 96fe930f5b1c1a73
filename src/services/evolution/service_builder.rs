use super::{Padding, Service, edge_cases};
use crate::{
    models::{Crossover, Mutagen, Schedule},
    oracle::{DateOracle, Gregorian},
};
use tracing::instrument;

/// Assembles a [`Service`]. Anything left unset takes the default: 100 cycles
/// of 100 candidates, a 0.15 mutation rate, single-point crossover, padding to
/// 10 valid and 10 invalid dates, and the Gregorian oracle.
pub struct ServiceBuilder {
    oracle: Box<dyn DateOracle + Send + Sync>,
    schedule: Schedule,
    crossover: Crossover,
    mutagen: Mutagen,
    padding: Padding,
}

impl Default for ServiceBuilder {
    fn default() -> Self {
        Self {
            oracle: Box::new(Gregorian),
            schedule: Schedule::default(),
            crossover: Crossover::default(),
            mutagen: Mutagen::default(),
            padding: Padding::default(),
        }
    }
}

impl ServiceBuilder {
    pub fn with_oracle<O>(mut self, oracle: O) -> Self
    where
        O: DateOracle + Send + Sync + 'static,
    {
        self.oracle = Box::new(oracle);
        self
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    pub fn with_mutagen(mut self, mutagen: Mutagen) -> Self {
        self.mutagen = mutagen;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[instrument(level = "debug", skip(self), fields(schedule = ?self.schedule, mutagen = ?self.mutagen, padding = ?self.padding))]
    pub fn build(self) -> Service {
        Service {
            oracle: self.oracle,
            schedule: self.schedule,
            crossover: self.crossover,
            mutagen: self.mutagen,
            padding: self.padding,
            edge_cases: edge_cases(),
        }
    }
}
