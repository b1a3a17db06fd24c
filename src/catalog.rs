// src/catalog.rs
//! Static service catalog for log-scout.

#![deny(missing_docs)]

use crate::error::ScoutError;
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One catalog entry: where a service's logs may live and which
/// downstream collections depend on it.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    /// Candidate log file paths or glob patterns.
    #[serde(default)]
    pub logs_file: Vec<String>,
    /// Dependent collection identifiers, consumed by the surrounding wizard.
    #[serde(default)]
    pub collections: Vec<String>,
}

/// The service catalog, keyed by unique service name.
///
/// Backed by a `BTreeMap` so iteration order is sorted and runs are
/// reproducible.
#[derive(Debug, Default)]
pub struct Catalog {
    services: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    /// Load the catalog from a JSON file mapping service name to entry.
    ///
    /// Unreadable or malformed input is returned as an error; the caller
    /// decides whether that is fatal.
    pub fn load(path: &Path) -> ScoutError<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read service catalog: {}", path.display()))?;
        let services: BTreeMap<String, CatalogEntry> = serde_json::from_str(&raw)
            .with_context(|| format!("malformed service catalog: {}", path.display()))?;
        Ok(Self { services })
    }

    /// Number of services in the catalog.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the catalog holds no services.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Iterate services in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CatalogEntry)> {
        self.services.iter()
    }
}
