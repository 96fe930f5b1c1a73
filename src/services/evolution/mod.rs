mod errors;
mod models;
mod service;
mod service_builder;

pub use errors::Error;
pub use models::{EDGE_CASES, EvolutionOutcome, Padding, PaddingError, Partition, edge_cases};
pub use service::Service;
pub use service_builder::ServiceBuilder;
