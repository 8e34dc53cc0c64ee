//! `[site]` configuration.

use serde::{Deserialize, Serialize};

/// Deployment origin of the published application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute origin the app is deployed under (e.g., "https://example.com").
    /// `APP_BASE_URL` and `--base-url` take precedence over this value.
    pub url: Option<String>,
}
