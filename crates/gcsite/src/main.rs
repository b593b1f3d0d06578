//! gcsite CLI - site configuration checker and homepage fragment renderer.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "gcsite")]
#[command(about = "Configuration checker and fragment renderer for the .NET profiling blog")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the site config file (.toml, .yaml or .yml)
    #[arg(short, long, default_value = "site.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default site config
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate the site config and its links
    Check {
        /// Also check that referenced assets exist in this directory
        #[arg(short, long)]
        static_dir: Option<PathBuf>,
    },

    /// Print the resolved site config
    Config {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Render the feature section, navbar, footer and stylesheet
    Render {
        /// Output directory
        #[arg(short, long, default_value = "build/fragments")]
        output: PathBuf,

        /// Feature set to render (defaults to homepage.features from the config)
        #[arg(short, long)]
        features: Option<String>,

        /// Skip stylesheet minification
        #[arg(long)]
        no_minify: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    Json,
    Toml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Check { static_dir } => {
            commands::check::run(&cli.config, static_dir.as_deref())?;
        }
        Commands::Config { format } => {
            commands::config::run(&cli.config, format)?;
        }
        Commands::Render {
            output,
            features,
            no_minify,
        } => {
            commands::render::run(&cli.config, &output, features.as_deref(), !no_minify)?;
        }
    }

    Ok(())
}
