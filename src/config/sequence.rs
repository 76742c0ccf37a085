//! Sequence backend selection

use serde::Deserialize;

/// Where OSRA number sequences are kept.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SequenceBackend {
    /// `osra_sequences` table, advanced by upsert
    Postgres,
    /// Redis INCR counters
    Redis,
    /// Process-local counters; numbers restart with the process
    #[default]
    Memory,
}

impl SequenceBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            SequenceBackend::Postgres => "postgres",
            SequenceBackend::Redis => "redis",
            SequenceBackend::Memory => "memory",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SequenceConfig {
    #[serde(default)]
    pub backend: SequenceBackend,
}
