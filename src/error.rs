// src/error.rs
//! Error handling for log-scout.

#![deny(missing_docs)]

/// ScoutError is alias for anyhow
pub type ScoutError<T> = anyhow::Result<T>;
