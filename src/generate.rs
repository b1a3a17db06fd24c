// src/generate.rs
//! Acquisition config generation for log-scout.

#![deny(missing_docs)]

use crate::detect::ServiceDetector;
use crate::error::ScoutError;
use anyhow::Context;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// One acquisition record, consumed by the downstream log pipeline.
///
/// Exactly one of `filename` and `filenames` is set, depending on how many
/// files were confirmed for the service.
#[derive(Debug, Serialize)]
pub struct AcquisitionEntry {
    /// Acquisition mode, always `"tail"`.
    pub mode: String,
    /// Record labels; carries at least `type` = service name.
    pub labels: BTreeMap<String, String>,
    /// Single confirmed file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Two or more confirmed files.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filenames: Vec<String>,
}

impl AcquisitionEntry {
    /// Build the record for a service and its confirmed files.
    /// `files` must be non-empty.
    fn for_service(service: &str, files: &[String]) -> Self {
        let mut labels = BTreeMap::new();
        labels.insert("type".to_string(), service.to_string());
        let (filename, filenames) = match files {
            [single] => (Some(single.clone()), Vec::new()),
            many => (None, many.to_vec()),
        };
        Self {
            mode: "tail".to_string(),
            labels,
            filename,
            filenames,
        }
    }
}

/// Append one acquisition record per detected service to `out`.
///
/// The file is opened create-or-append and never truncated; each record is
/// written as its own YAML document behind a `---` separator, so re-runs and
/// pre-existing content stay a well-formed multi-document stream. Services
/// with no confirmed files are skipped. Returns the number of records
/// written.
pub fn generate_acquis(sd: &ServiceDetector, out: &Path) -> ScoutError<usize> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(out)
        .with_context(|| format!("cannot open acquisition file: {}", out.display()))?;

    let mut written = 0;
    for record in sd.records() {
        if record.existing.is_empty() {
            continue;
        }
        let entry = AcquisitionEntry::for_service(&record.name, &record.existing);
        file.write_all(b"---\n")
            .with_context(|| format!("cannot write acquisition file: {}", out.display()))?;
        serde_yaml::to_writer(&mut file, &entry)
            .with_context(|| format!("cannot write acquisition file: {}", out.display()))?;
        written += 1;
    }
    Ok(written)
}
