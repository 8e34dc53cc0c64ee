//! Configuration check command.
//!
//! Resolves the configuration exactly as `generate` would and prints the
//! resulting plan without touching the filesystem. Fails with the same
//! errors `generate` would fail with, so CI can gate on it.

use crate::{config::AppConfig, generator::sitemap::SITEMAP_FILE, locale, log, utils::plural_count};
use anyhow::Result;

/// Print the resolved generation plan; fail on configuration errors.
pub fn check_site(config: &AppConfig) -> Result<()> {
    let base_url = config.base_url()?;

    warn_on_odd_origin(&base_url);

    log!("check"; "base url: {}", base_url);
    log!(
        "check";
        "{} listing {}",
        SITEMAP_FILE,
        plural_count(locale::LOCALES.len(), "locale edition")
    );
    for target in config.targets() {
        log!("check"; "target: {}", config.resolve_target(target).display());
    }

    Ok(())
}

/// Warn when the origin does not look like an http(s) URL.
///
/// Advisory only: `generate` inserts the configured value verbatim, so an
/// unusual origin must not fail the build here either.
fn warn_on_odd_origin(base_url: &str) {
    match url::Url::parse(base_url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
        Ok(parsed) => {
            log!("warning"; "base URL scheme '{}' is not http or https", parsed.scheme());
        }
        Err(e) => {
            log!("warning"; "base URL does not parse as a URL: {}", e);
        }
    }
}
