// src/lib.rs
// #![allow(dead_code)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod error;
pub mod file;
pub mod flatten;
pub mod progress;
pub mod provider;
pub mod runner;
pub mod scrape;
pub mod store;

pub use error::{Error, ProviderError, Result};

#[doc(hidden)]
pub use tracing as __tracing;
