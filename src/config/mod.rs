use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "numclass")]
#[command(about = "HTTP API that classifies integers and serves fun facts")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "8080")]
    pub port: u16,

    /// Base URL of the numeric-trivia service.
    #[arg(long, default_value = "http://numbersapi.com")]
    pub numbers_api_url: String,

    /// Hard deadline for the outbound trivia request, in seconds.
    #[arg(long, default_value = "3.0")]
    pub http_timeout_secs: f64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("host", &self.host)?;
        validation::validate_url("numbers_api_url", &self.numbers_api_url)?;
        validation::validate_range("http_timeout_secs", self.http_timeout_secs, 0.1, 60.0)?;
        Ok(())
    }
}
