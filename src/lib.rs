//! Evolves a category-balanced corpus of calendar-date test cases.
//!
//! A genetic algorithm searches (day, month, year) triples, rewarding dates it
//! has not seen before and categories it has seen least. After a fixed number
//! of cycles the discovered dates are split into valid and invalid test cases.

pub mod analysis;
pub mod export;
pub mod models;
pub mod oracle;
pub mod services;

pub use services::evolution::{EvolutionOutcome, Service};
