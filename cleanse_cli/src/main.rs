mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cleanse")]
#[command(version, about = "Streaming record cleansing CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean input partitions and print a quality report
    Run {
        /// Input file, or directory of partition files
        input: String,

        /// Output directory for cleaned partitions
        output: String,

        /// Path to a rule set file (YAML or TOML); overrides --preset
        #[arg(short, long)]
        rules: Option<String>,

        /// Built-in rule set: full, basic
        #[arg(short, long, default_value = "full")]
        preset: String,

        /// Report format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check a rule set file without reading any data
    Check {
        /// Path to the rule set file (YAML or TOML)
        rules: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Run {
            input,
            output,
            rules,
            preset,
            format,
        } => commands::run::execute(&input, &output, rules.as_deref(), &preset, &format).await,

        Commands::Check { rules } => commands::check::execute(&rules),
    }
}
