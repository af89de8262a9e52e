//! *Object Store* abstraction: the storage service (local filesystem, blob store,
//! HDFS...) an ORC file is resolved against.

pub mod local_store;
pub mod null_store;
pub mod url;

use std::sync::Arc;

use orcfile_io::ReadAt;
use url::ObjectUrl;

pub use local_store::{LocalFsMode, LocalFsObjectStore};
pub use null_store::NullObjectStore;

/// A "storage service" capable of opening readers for existing objects
/// given their URLs.
///
/// `Debug` is required so that a store can be named in diagnostics, e.g. when
/// a reader configuration is reported as incomplete.
pub trait ObjectStore: std::fmt::Debug + Send + Sync + 'static {
    /// Opens a reader for an existing object specified by the given URL.
    fn open(&self, url: &ObjectUrl) -> std::io::Result<Arc<dyn ReadAt>>;
}
