//! Challenge catalog and day-of-year selection
//!
//! The catalog is a fixed ordered list of challenge texts. Each calendar
//! day maps to one entry: days since January 1 of the same year, modulo
//! catalog length. The cycle wraps when the catalog is shorter than the
//! year and resets at every year boundary.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Embedded default catalog content (compile-time)
pub const DEFAULT_CATALOG_TOML: &str = include_str!("../../assets/challenges.toml");

static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    // The embedded asset is validated by tests; an unparsable asset is a
    // build defect, so fall back to an empty catalog rather than panic.
    let file: CatalogFile = toml::from_str(DEFAULT_CATALOG_TOML).unwrap_or_default();
    Catalog::new(file.challenges)
});

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    challenges: Vec<String>,
}

/// Error type for catalog lookups
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("challenge catalog has no entries")]
    Empty,
}

/// Fixed ordered list of daily challenges
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<String>,
}

impl Catalog {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> &'static Catalog {
        &DEFAULT_CATALOG
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Map a calendar date to a catalog index in `[0, len)`.
    ///
    /// Day-of-year based: December 31 and the following January 1 do not
    /// continue one running count; the offset restarts with each year.
    pub fn index_for_date(&self, date: NaiveDate) -> Result<usize, CatalogError> {
        if self.entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        // ordinal0 == whole days since January 1 of date's year
        let diff_days = date.ordinal0() as usize;
        Ok(diff_days % self.entries.len())
    }

    /// Resolve a catalog index to its challenge text
    pub fn resolve(&self, index: usize) -> Result<&str, CatalogError> {
        self.entries
            .get(index)
            .map(String::as_str)
            .ok_or(CatalogError::Empty)
    }

    /// The challenge for a given calendar date
    pub fn challenge_for(&self, date: NaiveDate) -> Result<&str, CatalogError> {
        self.resolve(self.index_for_date(date)?)
    }
}
