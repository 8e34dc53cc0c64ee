//! spa-sitemap - sitemap generation for localized single-page apps.

#![allow(dead_code)]

mod cli;
mod config;
mod generator;
mod locale;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::AppConfig;
use generator::sitemap::build_sitemap;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = AppConfig::load(cli)?;

    match &cli.command {
        Commands::Generate { .. } => build_sitemap(&config),
        Commands::Check => cli::check::check_site(&config),
    }
}
