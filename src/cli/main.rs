//! circuit-style command line entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use circuit_style::cli::commands::classify::handle_classify;
use circuit_style::cli::commands::palette::handle_palette;
use circuit_style::cli::commands::transform::{TransformArgs, handle_transform};
use circuit_style::cli::{CliError, ReportFormat};

#[derive(Parser)]
#[command(name = "circuit-style", version, about = "Derive a circuit-style map style from a vector-tile style")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the derived style
    Transform {
        /// Source style document ("-" for stdin)
        #[arg(short, long, default_value = "osm_bright.json")]
        input: String,

        /// Derived style document ("-" for stdout)
        #[arg(short, long, default_value = "circuit_style.json")]
        output: String,

        /// TOML file overriding the style name and palette
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Name of the derived style
        #[arg(long)]
        name: Option<String>,

        /// Report format: compact, pretty, json, none
        #[arg(long, default_value = "compact")]
        report: String,
    },
    /// Print the category every layer is assigned
    Classify {
        /// Style document ("-" for stdin)
        #[arg(short, long, default_value = "osm_bright.json")]
        input: String,

        /// Output format: table, json
        #[arg(short, long, default_value = "table")]
        format: String,
    },
    /// Print the effective palette as TOML
    Palette {
        /// TOML file to merge over the defaults
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("circuit_style=debug")
    } else {
        EnvFilter::new("circuit_style=info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Transform {
            input,
            output,
            config,
            name,
            report,
        } => {
            let report: ReportFormat = report
                .parse()
                .map_err(|e| CliError::InvalidArgument(format!("Invalid report format: {}", e)))?;
            let args = TransformArgs {
                input,
                output,
                config,
                name,
                report,
            };
            handle_transform(&args).await?;
        }
        Commands::Classify { input, format } => handle_classify(&input, &format).await?,
        Commands::Palette { config } => handle_palette(config.as_deref())?,
    }
    Ok(())
}
