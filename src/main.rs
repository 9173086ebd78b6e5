use std::path::PathBuf;

use clap::Parser;
use signgraph::pipeline::Pipeline;
use signgraph::register::SignRegister;
use signgraph::source::SqliteSource;
use signgraph::config;

/// Signgraph - converts a road-sign inventory database into Turtle files
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the sign inventory SQLite database
    #[arg(long, default_value = "verkeersborden.sqlite")]
    database: PathBuf,

    /// Path to the sign code register CSV
    #[arg(long)]
    register: Option<PathBuf>,

    /// Directory receiving the Turtle output units
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// File stem for output units ({stem}_{n}.ttl)
    #[arg(long, default_value = "verkeersborden")]
    file_stem: String,

    /// Placement window size for child queries
    #[arg(long, default_value_t = 100)]
    batch_size: usize,

    /// Placements per output unit
    #[arg(long, default_value_t = 14000)]
    write_size: usize,
}

impl From<Cli> for config::CliConfig {
    fn from(cli: Cli) -> Self {
        config::CliConfig {
            database: cli.database,
            register: cli.register,
            output_dir: cli.output_dir,
            file_stem: cli.file_stem,
            batch_size: cli.batch_size,
            write_size: cli.write_size,
        }
    }
}

fn main() {
    // Initialize logger - defaults to INFO level, can be overridden with RUST_LOG env var
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    println!("\nSigngraph v{}\n", env!("CARGO_PKG_VERSION"));

    let cli_config: config::CliConfig = cli.into();
    let config = match config::PipelineConfig::from_cli(cli_config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config) {
        eprintln!("Conversion failed: {e}");
        std::process::exit(1);
    }
}

fn run(config: config::PipelineConfig) -> anyhow::Result<()> {
    let source = SqliteSource::open(&config.database)?;
    let register = match &config.register {
        Some(path) => SignRegister::from_path(path)?,
        None => {
            log::warn!("no register given; every classification code will be reported as missed");
            SignRegister::empty()
        }
    };
    Pipeline::new(config, source, register).run()?;
    Ok(())
}
