use crate::app::report::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "subscriber-rules")]
#[command(about = "Filter and update in-memory subscribers with business rules")]
pub struct CliConfig {
    #[arg(long, help = "TOML file of subscribers to load instead of the built-in set")]
    pub seed: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, default_value = "3", allow_negative_numbers = true)]
    pub extend_months: i64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            format: OutputFormat::Text,
            extend_months: 3,
            verbose: false,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(seed) = &self.seed {
            validate_path("seed", seed)?;
        }
        // months are stored as u32, so larger extensions can never apply
        validate_range("extend_months", self.extend_months, 0, i64::from(u32::MAX))
    }
}
