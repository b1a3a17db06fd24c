// src/config.rs
//! Configuration file for log-scout.

#![deny(missing_docs)]

use crate::error::ScoutError;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// Config struct for log-scout.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Service catalog file.
    pub catalog: String,
    /// Generated acquisition file.
    pub output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: "services.json".into(),
            output: "acquis.yaml".into(),
        }
    }
}

impl Config {
    /// Load `.log-scout.toml` from `dir` (or its parent if `dir` is a file).
    /// If missing, return defaults. Ensures `catalog/output` are never empty.
    pub fn load_or_default(dir: &Path) -> ScoutError<Self> {
        let base = if dir.is_file() {
            dir.parent().unwrap_or(dir)
        } else {
            dir
        };
        let file = base.join(".log-scout.toml");
        if file.exists() {
            let s = fs::read_to_string(&file)?;
            let mut cfg: Config = toml::from_str(&s)?;
            if cfg.catalog.is_empty() {
                cfg.catalog = Config::default().catalog;
            }
            if cfg.output.is_empty() {
                cfg.output = Config::default().output;
            }
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }
    /// Write default configs to .log-scout.toml
    pub fn write_default_config_at(dir: &Path, force: bool) -> ScoutError<PathBuf> {
        let base = if dir.is_file() {
            dir.parent().unwrap_or(dir)
        } else {
            dir
        };
        let file = base.join(".log-scout.toml");
        if !file.exists() || force {
            let s = toml::to_string_pretty(&Self::default())?;
            fs::write(&file, s)?;
        }
        Ok(file)
    }
}
