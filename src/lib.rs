pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{NumbersApiClient, NO_FACT_FALLBACK};
pub use crate::config::CliConfig;
pub use crate::core::classifier::NumberClassifier;
pub use crate::domain::model::Classification;
pub use crate::utils::error::{ClassifyError, Result};
