use serde::{Deserialize, Serialize};

/// Controls how many generations run and how large each one is.
///
/// The search is generational: every cycle the whole population is evaluated,
/// halved into a breeding pool, and replaced by a full-size offspring generation.
///
/// # Examples
///
/// ```rust
/// use date_case_ga::models::Schedule;
///
/// // 100 cycles over populations of 100 candidates
/// let schedule = Schedule::generational(100, 100)?;
/// assert_eq!(schedule.breeding_pool_size(), 50);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Schedule {
    /// Number of evolution cycles before finalization.
    pub max_generations: usize,
    /// Number of candidates in every generation.
    pub population_size: usize,
}

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ScheduleError {
    #[error("max_generations must be at least 1")]
    NoGenerations,
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
}

impl Schedule {
    pub fn generational(
        max_generations: usize,
        population_size: usize,
    ) -> Result<Self, ScheduleError> {
        if max_generations == 0 {
            return Err(ScheduleError::NoGenerations);
        }

        // The breeding pool is half the population and must not be empty
        if population_size < 2 {
            return Err(ScheduleError::PopulationTooSmall(population_size));
        }

        Ok(Self {
            max_generations,
            population_size,
        })
    }

    /// Half the population, rounded down.
    pub fn breeding_pool_size(&self) -> usize {
        self.population_size / 2
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            max_generations: 100,
            population_size: 100,
        }
    }
}
