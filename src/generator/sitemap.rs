//! Sitemap generation.
//!
//! Generates a sitemap.xml listing every published locale edition of the
//! application root, and writes it to each destination directory.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset
//!   xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
//!   ...
//! >
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <changefreq>daily</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::AppConfig,
    locale::{self, Locale},
    log,
};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// Auxiliary namespaces, declared for compatibility with richer entries
// (news/xhtml/image/video extensions) even though no entry uses them yet.
const NEWS_NS: &str = "http://www.google.com/schemas/sitemap-news/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";
const VIDEO_NS: &str = "http://www.google.com/schemas/sitemap-video/1.1";

/// File name written into every destination directory.
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Build the sitemap and write it to every destination directory.
///
/// Targets are written sequentially in configured order; the first failure
/// aborts the remaining ones so a broken build never half-succeeds.
pub fn build_sitemap(config: &AppConfig) -> Result<()> {
    // Fatal before any document is built or directory touched
    let base_url = config.base_url()?;

    let xml = Sitemap::build(&base_url, locale::LOCALES).into_xml();

    for target in config.targets() {
        let dir = config.resolve_target(target);
        let path = write_xml(&xml, &dir)?;
        log!("sitemap"; "written to {}", path.display());
    }

    Ok(())
}

/// Change frequency hint per the sitemap protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// Hint applied to every entry: the root document is redeployed continuously.
const CHANGE_FREQ: ChangeFreq = ChangeFreq::Daily;

/// Priority applied to every entry; all editions rank equally.
const PRIORITY: &str = "1.0";

pub struct Sitemap {
    entries: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    changefreq: ChangeFreq,
    priority: &'static str,
}

impl Sitemap {
    /// Map each locale to its URL entry, in table order.
    ///
    /// Pure: no I/O, no clock. The same inputs always produce the same
    /// document, which keeps serialized output diffable.
    pub fn build(base_url: &str, locales: &[Locale]) -> Self {
        let entries = locales
            .iter()
            .map(|locale| UrlEntry {
                loc: format!("{}{}", base_url, locale.route()),
                changefreq: CHANGE_FREQ,
                priority: PRIORITY,
            })
            .collect();

        Self { entries }
    }

    /// Serialize to the sitemap XML document.
    ///
    /// Output is byte-stable for a given document. `loc` values are
    /// operator-supplied configuration and are inserted verbatim, without
    /// percent-encoding or XML escaping.
    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset\n");
        xml.push_str("  xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\"\n  xmlns:news=\"");
        xml.push_str(NEWS_NS);
        xml.push_str("\"\n  xmlns:xhtml=\"");
        xml.push_str(XHTML_NS);
        xml.push_str("\"\n  xmlns:image=\"");
        xml.push_str(IMAGE_NS);
        xml.push_str("\"\n  xmlns:video=\"");
        xml.push_str(VIDEO_NS);
        xml.push_str("\"\n>\n");

        for entry in &self.entries {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&entry.loc);
            xml.push_str("</loc>\n    <changefreq>");
            xml.push_str(entry.changefreq.as_str());
            xml.push_str("</changefreq>\n    <priority>");
            xml.push_str(entry.priority);
            xml.push_str("</priority>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Write the serialized document into `dir`, creating it (and missing
/// ancestors) as needed. Fully replaces any existing sitemap file.
///
/// Returns the path of the written file.
fn write_xml(xml: &str, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(SITEMAP_FILE);
    fs::write(&path, xml)
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(root: &Path, url: Option<&str>, targets: &[&str]) -> AppConfig {
        let mut config = AppConfig::default();
        config.root = root.to_path_buf();
        config.site.url = url.map(str::to_string);
        config.output.targets = targets.iter().map(PathBuf::from).collect();
        config
    }

    #[test]
    fn test_build_one_entry_per_locale() {
        let sitemap = Sitemap::build("https://example.com", locale::LOCALES);
        assert_eq!(sitemap.entries.len(), locale::LOCALES.len());
    }

    #[test]
    fn test_build_entry_locs() {
        let locales = [Locale::new(""), Locale::new("ru")];
        let sitemap = Sitemap::build("https://example.com", &locales);

        assert_eq!(sitemap.entries[0].loc, "https://example.com/");
        assert_eq!(sitemap.entries[1].loc, "https://example.com/?lang=ru");
    }

    #[test]
    fn test_xml_matches_expected_layout() {
        let locales = [Locale::new(""), Locale::new("ru")];
        let xml = Sitemap::build("https://example.com", &locales).into_xml();

        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset
  xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
  xmlns:news="http://www.google.com/schemas/sitemap-news/0.9"
  xmlns:xhtml="http://www.w3.org/1999/xhtml"
  xmlns:image="http://www.google.com/schemas/sitemap-image/1.1"
  xmlns:video="http://www.google.com/schemas/sitemap-video/1.1"
>
  <url>
    <loc>https://example.com/</loc>
    <changefreq>daily</changefreq>
    <priority>1.0</priority>
  </url>
  <url>
    <loc>https://example.com/?lang=ru</loc>
    <changefreq>daily</changefreq>
    <priority>1.0</priority>
  </url>
</urlset>
"#;
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_serialization_deterministic() {
        let first = Sitemap::build("https://example.com", locale::LOCALES).into_xml();
        let second = Sitemap::build("https://example.com", locale::LOCALES).into_xml();
        assert_eq!(first, second);
    }

    #[test]
    fn test_field_order_within_entry() {
        let xml = Sitemap::build("https://example.com", &[Locale::new("")]).into_xml();

        let loc = xml.find("<loc>").unwrap();
        let changefreq = xml.find("<changefreq>").unwrap();
        let priority = xml.find("<priority>").unwrap();
        assert!(loc < changefreq && changefreq < priority);
    }

    #[test]
    fn test_loc_inserted_verbatim() {
        // Operator-supplied origin is trusted; no escaping is applied
        let xml = Sitemap::build("https://example.com?x=1&y=2", &[Locale::new("")]).into_xml();
        assert!(xml.contains("<loc>https://example.com?x=1&y=2/</loc>"));
    }

    #[test]
    fn test_no_duplicate_locs() {
        let xml = Sitemap::build("https://example.com", locale::LOCALES).into_xml();

        for locale in locale::LOCALES {
            let needle = format!("<loc>https://example.com{}</loc>", locale.route());
            assert_eq!(xml.matches(needle.as_str()).count(), 1);
        }
        assert_eq!(xml.matches("<url>").count(), locale::LOCALES.len());
    }

    #[test]
    fn test_write_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("dist").join("client");

        let path = write_xml("<urlset/>", &nested).unwrap();

        assert!(nested.is_dir());
        assert_eq!(fs::read_to_string(path).unwrap(), "<urlset/>");
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SITEMAP_FILE), "stale content").unwrap();

        let path = write_xml("<urlset/>", dir.path()).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "<urlset/>");
    }

    #[test]
    fn test_build_sitemap_multiple_targets() {
        let dir = TempDir::new().unwrap();
        let config = test_config(
            dir.path(),
            Some("https://example.com/"),
            &["public", "dist/client"],
        );

        build_sitemap(&config).unwrap();

        let first = fs::read_to_string(dir.path().join("public").join(SITEMAP_FILE)).unwrap();
        let second =
            fs::read_to_string(dir.path().join("dist/client").join(SITEMAP_FILE)).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("<loc>https://example.com/</loc>"));
        assert!(first.contains("<loc>https://example.com/?lang=ru</loc>"));
    }

    #[test]
    fn test_build_sitemap_missing_base_url_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path(), None, &["public"]);

        assert!(build_sitemap(&config).is_err());
        assert!(!dir.path().join("public").exists());
    }

    #[test]
    fn test_build_sitemap_aborts_after_first_failure() {
        let dir = TempDir::new().unwrap();
        // First target resolves onto an existing file, so create_dir_all fails
        fs::write(dir.path().join("blocked"), "not a directory").unwrap();
        let config = test_config(
            dir.path(),
            Some("https://example.com"),
            &["blocked", "second"],
        );

        assert!(build_sitemap(&config).is_err());
        assert!(!dir.path().join("second").exists());
    }
}
