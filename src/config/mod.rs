//! Configuration model for lockstamp.
//!
//! This module defines the Config struct loaded from a YAML file passed with
//! `--config`. It supports forward-compatible YAML parsing (unknown fields are
//! ignored), defaults for every field, and validation of config values.

mod model;
mod operations;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
