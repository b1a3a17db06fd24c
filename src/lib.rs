// src/lib.rs
//! Log Scout library.

#![deny(missing_docs)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod generate;
