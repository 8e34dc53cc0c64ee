//! Output generators for build artifacts.
//!
//! One generator today: the sitemap listing every published locale edition
//! of the application root (`sitemap.xml`). Runs as a single-pass pipeline
//! (resolve config, build document, serialize, write per target) with no
//! retries; any failing step aborts the invocation.

pub mod sitemap;
