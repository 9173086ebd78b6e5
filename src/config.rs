use std::path::PathBuf;

use thiserror::Error;
use validator::Validate;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Raw CLI arguments, converted into a validated [`PipelineConfig`].
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub database: PathBuf,
    pub register: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub file_stem: String,
    pub batch_size: usize,
    pub write_size: usize,
}

/// Pipeline configuration with validation
#[derive(Clone, Debug, Validate)]
pub struct PipelineConfig {
    /// Path to the sign inventory SQLite database
    pub database: PathBuf,

    /// Optional path to the sign code register CSV
    pub register: Option<PathBuf>,

    /// Directory receiving the Turtle output units
    pub output_dir: PathBuf,

    /// File stem for output units: `{stem}_{n}.ttl`
    #[validate(length(min = 1, message = "File stem cannot be empty"))]
    pub file_stem: String,

    /// Placement window size bounding the id-set filter of child queries.
    /// A query-efficiency device only; it must not change the output.
    #[validate(range(min = 1, message = "Batch size must be at least 1"))]
    pub batch_size: usize,

    /// Placements per output unit; bounds live triples, and thereby memory,
    /// independent of total input size
    #[validate(range(min = 1, message = "Write size must be at least 1"))]
    pub write_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("verkeersborden.sqlite"),
            register: None,
            output_dir: PathBuf::from("."),
            file_stem: "verkeersborden".to_string(),
            batch_size: 100,
            write_size: 14000,
        }
    }
}

impl PipelineConfig {
    /// Create configuration from CLI arguments, validating ranges.
    pub fn from_cli(cli: CliConfig) -> Result<Self, ConfigError> {
        let config = Self {
            database: cli.database,
            register: cli.register,
            output_dir: cli.output_dir,
            file_stem: cli.file_stem,
            batch_size: cli.batch_size,
            write_size: cli.write_size,
        };
        config.validate()?;
        Ok(config)
    }
}
