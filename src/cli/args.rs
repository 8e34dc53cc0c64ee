//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Sitemap generator for localized single-page apps
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitemap.toml)
    #[arg(short = 'C', long, default_value = "sitemap.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the deployment origin (default: APP_BASE_URL, then [site] url)
    #[arg(short = 'U', long = "base-url", global = true, value_hint = clap::ValueHint::Url)]
    pub base_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate sitemap.xml into each destination directory
    #[command(visible_alias = "g")]
    Generate {
        /// Destination directories, absolute or project-root-relative
        /// (default: public)
        #[arg(value_name = "DIR", value_hint = clap::ValueHint::DirPath)]
        targets: Vec<PathBuf>,
    },

    /// Validate configuration and print the generation plan without writing
    #[command(visible_alias = "c")]
    Check,
}
