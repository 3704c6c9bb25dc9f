pub mod distributor;
pub mod engine;

pub use crate::domain::model::{BatchJob, DistributionCounts, DistributionReport, Parity};
pub use crate::domain::ports::{LineSink, LineSource};
pub use crate::utils::error::Result;
