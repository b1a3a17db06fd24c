// src/detect.rs
//! Service detection registry for log-scout.

#![deny(missing_docs)]

use crate::catalog::Catalog;
use crate::error::ScoutError;
use anyhow::Context;
use glob::glob;
use std::collections::BTreeMap;

/// Detection state for one service.
#[derive(Debug, Default)]
pub struct DetectionRecord {
    /// Service name, unique registry key.
    pub name: String,
    /// Candidate log paths or glob patterns, copied from the catalog.
    /// Empty for ad hoc registrations.
    pub patterns: Vec<String>,
    /// Files confirmed to exist on this host. Grows only; duplicates from
    /// overlapping patterns are kept as-is.
    pub existing: Vec<String>,
}

impl DetectionRecord {
    /// Expand every candidate pattern against the filesystem and append the
    /// matches to `existing`. Plain paths are valid glob patterns, so both
    /// go through the same expansion.
    pub fn detect(&mut self) -> ScoutError<()> {
        for pattern in &self.patterns {
            let paths =
                glob(pattern).with_context(|| format!("bad log pattern: {pattern}"))?;
            for entry in paths {
                let path =
                    entry.with_context(|| format!("cannot expand log pattern: {pattern}"))?;
                self.existing.push(path.to_string_lossy().into_owned());
            }
        }
        Ok(())
    }
}

/// Registry of detection records, keyed by service name.
#[derive(Debug, Default)]
pub struct ServiceDetector {
    records: BTreeMap<String, DetectionRecord>,
    collections: BTreeMap<String, Vec<String>>,
}

impl ServiceDetector {
    /// Seed the registry from a catalog: one record per service with its
    /// candidate patterns and no confirmed files yet.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut sd = Self::default();
        for (service, entry) in catalog.iter() {
            sd.records.insert(
                service.clone(),
                DetectionRecord {
                    name: service.clone(),
                    patterns: entry.logs_file.clone(),
                    existing: Vec::new(),
                },
            );
            sd.collections
                .insert(service.clone(), entry.collections.clone());
        }
        sd
    }

    /// Register extra files under a service name, outside the catalog.
    ///
    /// The files are treated as already confirmed and bypass detection. An
    /// existing record gets them appended; an unknown name gets a fresh
    /// record with no candidate patterns.
    pub fn register_files(&mut self, files: &[String], service: &str) {
        if let Some(record) = self.records.get_mut(service) {
            record.existing.extend(files.iter().cloned());
        } else {
            self.records.insert(
                service.to_string(),
                DetectionRecord {
                    name: service.to_string(),
                    patterns: Vec::new(),
                    existing: files.to_vec(),
                },
            );
        }
    }

    /// Run detection over every registered record.
    ///
    /// The first failure aborts the pass; records probed before the failure
    /// keep their results.
    pub fn detect(&mut self) -> ScoutError<()> {
        for record in self.records.values_mut() {
            record.detect()?;
        }
        Ok(())
    }

    /// Iterate records in sorted service-name order.
    pub fn records(&self) -> impl Iterator<Item = &DetectionRecord> {
        self.records.values()
    }

    /// Dependent collection identifiers for a service, if known.
    pub fn collections(&self, service: &str) -> Option<&[String]> {
        self.collections.get(service).map(Vec::as_slice)
    }
}
