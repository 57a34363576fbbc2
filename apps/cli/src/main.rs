//! # formcheck CLI Entry Point
//!
//! Loads settings, installs logging, builds the validator and dispatches.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use formcheck_cli::report::{self, DEMO_VECTORS};
use formcheck_cli::settings::Settings;
use formcheck_validator::remote::ZipDistance;
use formcheck_validator::{Registry, Validator};

/// Validate form fields against the standard rule table.
#[derive(Parser, Debug)]
#[command(name = "formcheck", version, about)]
struct Cli {
    /// TOML file with `[zip]` and `[log]` tables.
    #[arg(long, global = true, env = "FORMCHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Skip the remote zip lookup; every zip then fails.
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the built-in vectors and print a pass/fail table.
    Demo,
    /// Validate one value; exits non-zero when it fails.
    Check {
        /// Field type, e.g. `email` or `zip`.
        field_type: String,
        /// Value to validate.
        value: String,
        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    formcheck_log::init_with(settings.log.clone()).context("failed to set up logging")?;

    let validator = if cli.offline {
        tracing::info!("zip lookups disabled");
        Validator::new(Registry::standard(ZipDistance::offline(settings.zip.origin.clone())))
    } else {
        if settings.zip.api_key.is_empty() {
            tracing::warn!("no zip api key configured, set FORMCHECK_ZIP_API_KEY");
        }
        Validator::from_config(&settings.zip).context("failed to build zip distance client")?
    };
    tracing::debug!(registry = ?validator.registry(), "validator ready");

    match cli.command {
        Commands::Demo => {
            print!("{}", report::demo_table(&validator, DEMO_VECTORS));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            field_type,
            value,
            json,
        } => {
            let field_report = validator.validate_field_report(&field_type, &value);
            if json {
                println!("{}", serde_json::to_string_pretty(&field_report)?);
            } else {
                print!("{}", report::render_check(&field_report));
            }
            Ok(if field_report.passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
