//! Reader-side configuration for ORC files.
//!
//! [`DataReaderProperties`] bundles everything a low-level ORC data reader needs
//! to be constructed: the storage handle and path of the file, an optional
//! already-open handle, the compression kind and a few I/O tuning knobs. It is
//! obtained exclusively through [`DataReaderPropertiesBuilder`], whose `build`
//! validates the mandatory fields.
//!
//! ```
//! use std::sync::Arc;
//!
//! use orcfile_objectstore::{NullObjectStore, url::ObjectUrl};
//! use orcfile_reader::{CompressionKind, DataReaderProperties};
//!
//! let props = DataReaderProperties::builder()
//!     .with_file_system(Arc::new(NullObjectStore))
//!     .with_path(ObjectUrl::parse("file:///a/b.orc").unwrap())
//!     .with_compression(CompressionKind::Zstd)
//!     .with_buffer_size(256 * 1024)
//!     .build()
//!     .unwrap();
//! assert_eq!(props.buffer_size(), 256 * 1024);
//! ```

pub mod compression;
pub mod conf;
pub mod properties;

pub use compression::CompressionKind;
pub use conf::{DEFAULT_MAX_DISK_RANGE_CHUNK_LIMIT, ReaderConf};
pub use properties::{DataReaderProperties, DataReaderPropertiesBuilder};
