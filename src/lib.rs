pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{toml_config::JobFile, RunConfig};
pub use crate::core::distributor::{distribute, distribute_text, split_lines};
pub use crate::core::engine::{process_batch, BatchEngine};
pub use crate::domain::model::{BatchJob, DistributionCounts, DistributionReport, Parity};
pub use crate::utils::error::{BatchError, Result};
