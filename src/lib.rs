// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

pub mod config;
pub mod error;

pub mod record;
pub mod metrics;
pub mod sort;
pub mod specs;

pub mod ingest;
pub mod export;

pub mod csv;
pub mod file;
pub mod progress;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
