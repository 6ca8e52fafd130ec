//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Configuration for lockstamp.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Suffix appended to a data file's path to name its sentinel
    /// (default: ".stamp", so `users.tbl` pairs with `users.tbl.stamp`).
    #[serde(default = "default_stamp_suffix")]
    pub stamp_suffix: String,

    /// Whether payload and stamp writes are fsynced before the lock is released.
    #[serde(default = "default_true")]
    pub sync_on_write: bool,

    /// Log filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stamp_suffix: default_stamp_suffix(),
            sync_on_write: default_true(),
            log_filter: default_log_filter(),
        }
    }
}

pub(crate) fn default_stamp_suffix() -> String {
    ".stamp".to_string()
}

pub(crate) fn default_log_filter() -> String {
    "warn".to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
