pub mod classifier;
pub mod number;

pub use crate::domain::model::Classification;
pub use crate::domain::ports::FactProvider;
pub use crate::utils::error::Result;
