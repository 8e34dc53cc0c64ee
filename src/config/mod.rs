//! Tool configuration for `sitemap.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                      |
//! |------------|----------------------------------------------|
//! | `[site]`   | Deployment origin (base URL)                 |
//! | `[output]` | Destination directories for `sitemap.xml`    |
//!
//! The config file is optional: the tool can run entirely from the
//! `APP_BASE_URL` environment variable with the default output target.
//! When present, the file anchors the project root (its parent directory),
//! so relative targets resolve the same way from any invocation directory.

mod error;
pub mod section;

pub use error::ConfigError;
pub use section::{OutputConfig, SiteConfig};

use crate::{
    cli::{Cli, Commands},
    debug, log,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Environment variable supplying the deployment origin.
pub const BASE_URL_ENV: &str = "APP_BASE_URL";

/// Root configuration structure representing sitemap.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site settings (deployment origin)
    #[serde(default)]
    pub site: SiteConfig,

    /// Output settings (destination directories)
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file; the project root is the
    /// config file's parent directory. A missing config file is not an error:
    /// defaults apply and the current directory becomes the root.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => Self::default(),
        };

        config.cli = Some(cli);
        config.finalize(cli);
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        // A build step cannot prompt; warn and continue with known fields.
        if !ignored.is_empty() {
            let display_path = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_else(|| path.to_string_lossy());
            log!("warning"; "unknown fields in {}, ignoring:", display_path);
            for field in &ignored {
                eprintln!("- {field}");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        // Resolve root: config file parent, or cwd when running config-less
        let root = self
            .config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
        self.root = crate::utils::path::normalize_path(&root);
        debug!("config"; "project root: {}", self.root.display());

        // Base URL precedence: CLI flag, then environment, then config file
        if let Some(url) = &cli.base_url {
            self.site.url = Some(url.clone());
        } else if let Ok(url) = std::env::var(BASE_URL_ENV)
            && !url.is_empty()
        {
            self.site.url = Some(url);
        }

        self.apply_command_options(cli);

        // An explicitly empty target list falls back to the default
        if self.output.targets.is_empty() {
            self.output.targets = OutputConfig::default().targets;
        }
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        if let Commands::Generate { targets } = &cli.command
            && !targets.is_empty()
        {
            self.output.targets = targets.clone();
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Destination directories, in configured order.
    pub fn targets(&self) -> &[PathBuf] {
        &self.output.targets
    }

    /// Resolve a destination directory to absolute form against the root.
    pub fn resolve_target(&self, target: &Path) -> PathBuf {
        crate::utils::path::resolve_target(target, &self.root)
    }

    /// Resolve the deployment origin used to build `<loc>` values.
    ///
    /// Fatal when absent or empty: generation must not proceed to build a
    /// document or touch any target directory without it.
    pub fn base_url(&self) -> Result<String, ConfigError> {
        resolve_base_url(self.site.url.as_deref())
    }
}

/// Trim exactly one trailing `/` and reject absent or empty values.
pub fn resolve_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.unwrap_or_default();
    let trimmed = raw.strip_suffix('/').unwrap_or(raw);
    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }
    Ok(trimmed.to_string())
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding
/// `config_name`. Returns the absolute path to the config file if found.
fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================
