//! Process-level reader configuration.
//!
//! [`ReaderConf`] supplies the defaults a [`DataReaderPropertiesBuilder`] starts
//! from. Callers either pass an explicit instance (`builder_with_conf`) or rely
//! on the process-wide one returned by [`ReaderConf::global`].
//!
//! [`DataReaderPropertiesBuilder`]: crate::DataReaderPropertiesBuilder

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use orcfile_common::error::Error;
use serde::{Deserialize, Serialize};

/// Default upper bound, in bytes, for a merged disk read range: `i32::MAX - 1024`.
pub const DEFAULT_MAX_DISK_RANGE_CHUNK_LIMIT: usize = i32::MAX as usize - 1024;

/// Configuration defaults for ORC data readers.
///
/// Serialized with the ORC configuration key names, e.g.
/// `{"orc.max.disk.range.chunk.limit": 1048576}`. Absent keys keep their
/// default values; keys of other ORC settings are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConf {
    /// Upper bound, in bytes, on how large a coalesced disk read range may grow.
    #[serde(rename = "orc.max.disk.range.chunk.limit")]
    pub max_disk_range_chunk_limit: usize,
}

impl ReaderConf {
    /// Parses a configuration from its JSON representation.
    pub fn from_json(json: &str) -> orcfile_common::Result<ReaderConf> {
        serde_json::from_str(json).map_err(|e| Error::invalid_arg("reader conf", e.to_string()))
    }

    pub fn with_max_disk_range_chunk_limit(mut self, value: usize) -> Self {
        self.max_disk_range_chunk_limit = value;
        self
    }

    /// Returns the process-wide configuration.
    ///
    /// Initialized to [`ReaderConf::default`] on first access.
    pub fn global() -> Arc<ReaderConf> {
        let conf = GLOBAL_CONF.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&conf)
    }

    /// Replaces the process-wide configuration.
    ///
    /// Affects builders created afterwards; already created builders and built
    /// properties keep the values they were seeded with.
    pub fn set_global(conf: ReaderConf) {
        log::debug!("replacing global reader conf: {conf:?}");
        let mut global = GLOBAL_CONF.write().unwrap_or_else(PoisonError::into_inner);
        *global = Arc::new(conf);
    }
}

impl Default for ReaderConf {
    fn default() -> Self {
        ReaderConf {
            max_disk_range_chunk_limit: DEFAULT_MAX_DISK_RANGE_CHUNK_LIMIT,
        }
    }
}

static GLOBAL_CONF: LazyLock<RwLock<Arc<ReaderConf>>> =
    LazyLock::new(|| RwLock::new(Arc::new(ReaderConf::default())));
