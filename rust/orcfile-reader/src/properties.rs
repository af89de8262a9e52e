use std::{fmt, sync::Arc};

use orcfile_common::error::Error;
use orcfile_io::ReadAt;
use orcfile_objectstore::{ObjectStore, url::ObjectUrl};

use crate::{CompressionKind, ReaderConf};

/// Immutable configuration of a low-level ORC data reader.
///
/// Holds the storage handle and location of the file, an optional already-open
/// handle on it and the reader's I/O settings. Instances are created only by
/// [`DataReaderPropertiesBuilder::build`] and are never modified afterwards,
/// so they can be cloned and shared between threads freely.
///
/// The properties merely reference the handles they were given: nothing is
/// opened, closed or read here.
#[derive(Clone)]
pub struct DataReaderProperties {
    file_system: Arc<dyn ObjectStore>,
    path: ObjectUrl,
    file: Option<Arc<dyn ReadAt>>,
    compression: Option<CompressionKind>,
    zero_copy: bool,
    type_count: usize,
    buffer_size: usize,
    max_disk_range_chunk_limit: usize,
}

impl DataReaderProperties {
    /// Creates a builder seeded from the process-wide [`ReaderConf`].
    pub fn builder() -> DataReaderPropertiesBuilder {
        DataReaderPropertiesBuilder::new(&ReaderConf::global())
    }

    /// Creates a builder seeded from the given configuration.
    pub fn builder_with_conf(conf: &ReaderConf) -> DataReaderPropertiesBuilder {
        DataReaderPropertiesBuilder::new(conf)
    }

    /// The object store `path` is resolved against.
    pub fn file_system(&self) -> &Arc<dyn ObjectStore> {
        &self.file_system
    }

    /// Location of the ORC file within [`file_system`](Self::file_system).
    pub fn path(&self) -> &ObjectUrl {
        &self.path
    }

    /// Already-open handle on the file, if the caller supplied one.
    ///
    /// When `None`, the reader is expected to open the file itself through
    /// `file_system` and `path`.
    pub fn file(&self) -> Option<&Arc<dyn ReadAt>> {
        self.file.as_ref()
    }

    pub fn compression(&self) -> Option<CompressionKind> {
        self.compression
    }

    /// Whether the reader should hand out buffers that reference the underlying
    /// storage instead of copies. Advisory: the reader decides whether the
    /// storage supports it.
    pub fn zero_copy(&self) -> bool {
        self.zero_copy
    }

    /// Number of types (columns) declared in the file schema.
    pub fn type_count(&self) -> usize {
        self.type_count
    }

    /// I/O buffer size in bytes. Zero means "not specified".
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Upper bound, in bytes, on the size of a coalesced disk read range.
    pub fn max_disk_range_chunk_limit(&self) -> usize {
        self.max_disk_range_chunk_limit
    }
}

impl fmt::Debug for DataReaderProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataReaderProperties")
            .field("file_system", &self.file_system)
            .field("path", &self.path.as_str())
            .field("file", &self.file.as_ref().map(|_| "<open>"))
            .field("compression", &self.compression)
            .field("zero_copy", &self.zero_copy)
            .field("type_count", &self.type_count)
            .field("buffer_size", &self.buffer_size)
            .field(
                "max_disk_range_chunk_limit",
                &self.max_disk_range_chunk_limit,
            )
            .finish()
    }
}

/// Staging area for [`DataReaderProperties`].
///
/// Every setter stores its value unconditionally and returns the builder, so
/// calls can be chained in any order; setting a field twice keeps the last
/// value. Validation happens once, in [`build`](Self::build).
pub struct DataReaderPropertiesBuilder {
    file_system: Option<Arc<dyn ObjectStore>>,
    path: Option<ObjectUrl>,
    file: Option<Arc<dyn ReadAt>>,
    compression: Option<CompressionKind>,
    zero_copy: bool,
    type_count: usize,
    buffer_size: usize,
    max_disk_range_chunk_limit: usize,
}

impl DataReaderPropertiesBuilder {
    fn new(conf: &ReaderConf) -> DataReaderPropertiesBuilder {
        DataReaderPropertiesBuilder {
            file_system: None,
            path: None,
            file: None,
            compression: None,
            zero_copy: false,
            type_count: 0,
            buffer_size: 0,
            max_disk_range_chunk_limit: conf.max_disk_range_chunk_limit,
        }
    }

    pub fn with_file_system(mut self, file_system: Arc<dyn ObjectStore>) -> Self {
        self.file_system = Some(file_system);
        self
    }

    pub fn with_path(mut self, path: ObjectUrl) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_file(mut self, file: Arc<dyn ReadAt>) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_compression(mut self, compression: CompressionKind) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn with_zero_copy(mut self, zero_copy: bool) -> Self {
        self.zero_copy = zero_copy;
        self
    }

    pub fn with_type_count(mut self, type_count: usize) -> Self {
        self.type_count = type_count;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Overrides the chunk limit taken from the [`ReaderConf`].
    pub fn with_max_disk_range_chunk_limit(mut self, limit: usize) -> Self {
        self.max_disk_range_chunk_limit = limit;
        self
    }

    /// Validates the staged values and freezes them into [`DataReaderProperties`].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MissingRequiredField`] when the file system or the
    /// path (or both) has not been set. The error carries the current values of
    /// both fields.
    ///
    /// [`ErrorKind::MissingRequiredField`]: orcfile_common::error::ErrorKind::MissingRequiredField
    pub fn build(self) -> orcfile_common::Result<DataReaderProperties> {
        match (self.file_system, self.path) {
            (Some(file_system), Some(path)) => {
                let props = DataReaderProperties {
                    file_system,
                    path,
                    file: self.file,
                    compression: self.compression,
                    zero_copy: self.zero_copy,
                    type_count: self.type_count,
                    buffer_size: self.buffer_size,
                    max_disk_range_chunk_limit: self.max_disk_range_chunk_limit,
                };
                log::debug!("built {props:?}");
                Ok(props)
            }
            (file_system, path) => {
                let err = Error::missing_required_field(
                    file_system.map(|fs| format!("{fs:?}")),
                    path.map(|path| path.to_string()),
                );
                log::warn!("cannot build data reader properties: {err}");
                Err(err)
            }
        }
    }
}

impl fmt::Debug for DataReaderPropertiesBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataReaderPropertiesBuilder")
            .field("file_system", &self.file_system)
            .field("path", &self.path.as_ref().map(ObjectUrl::as_str))
            .field("file", &self.file.as_ref().map(|_| "<open>"))
            .field("compression", &self.compression)
            .field("zero_copy", &self.zero_copy)
            .field("type_count", &self.type_count)
            .field("buffer_size", &self.buffer_size)
            .field(
                "max_disk_range_chunk_limit",
                &self.max_disk_range_chunk_limit,
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use orcfile_common::error::ErrorKind;
    use orcfile_io::ReadAt;
    use orcfile_objectstore::{NullObjectStore, ObjectStore, url::ObjectUrl};

    use crate::{CompressionKind, DataReaderProperties, ReaderConf};

    fn null_store() -> Arc<dyn ObjectStore> {
        Arc::new(NullObjectStore)
    }

    fn orc_path() -> ObjectUrl {
        ObjectUrl::parse("file:///a/b.orc").unwrap()
    }

    fn test_conf() -> ReaderConf {
        ReaderConf::default().with_max_disk_range_chunk_limit(8 * 1024 * 1024)
    }

    #[test]
    fn test_defaults() {
        let props = DataReaderProperties::builder_with_conf(&test_conf())
            .with_file_system(null_store())
            .with_path(orc_path())
            .build()
            .unwrap();
        assert_eq!(props.path().as_str(), "file:///a/b.orc");
        assert!(props.file().is_none());
        assert_eq!(props.compression(), None);
        assert!(!props.zero_copy());
        assert_eq!(props.type_count(), 0);
        assert_eq!(props.buffer_size(), 0);
        assert_eq!(props.max_disk_range_chunk_limit(), 8 * 1024 * 1024);
    }

    #[test]
    fn test_all_fields() {
        let store = null_store();
        let file: Arc<dyn ReadAt> = Arc::new(b"ORC".to_vec());
        let props = DataReaderProperties::builder_with_conf(&test_conf())
            .with_file_system(store.clone())
            .with_path(orc_path())
            .with_file(file.clone())
            .with_compression(CompressionKind::Snappy)
            .with_zero_copy(true)
            .with_type_count(12)
            .with_buffer_size(262144)
            .with_max_disk_range_chunk_limit(1048576)
            .build()
            .unwrap();
        assert!(Arc::ptr_eq(props.file_system(), &store));
        assert!(Arc::ptr_eq(props.file().unwrap(), &file));
        assert_eq!(props.compression(), Some(CompressionKind::Snappy));
        assert!(props.zero_copy());
        assert_eq!(props.type_count(), 12);
        assert_eq!(props.buffer_size(), 262144);
        assert_eq!(props.max_disk_range_chunk_limit(), 1048576);
    }

    #[test]
    fn test_missing_file_system() {
        let err = DataReaderProperties::builder()
            .with_path(orc_path())
            .build()
            .unwrap_err();
        assert!(err.is_missing_required_field());
        assert!(err.to_string().contains("fileSystem = null"));
        assert!(err.to_string().contains("path = file:///a/b.orc"));
    }

    #[test]
    fn test_missing_path_echoes_file_system() {
        let err = DataReaderProperties::builder()
            .with_file_system(null_store())
            .build()
            .unwrap_err();
        match err.into_kind() {
            ErrorKind::MissingRequiredField { file_system, path } => {
                assert_eq!(file_system.as_deref(), Some("NullObjectStore"));
                assert_eq!(path, None);
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn test_debug_output() {
        let builder = DataReaderProperties::builder_with_conf(&test_conf())
            .with_file_system(null_store())
            .with_path(orc_path())
            .with_file(Arc::new(Vec::<u8>::new()));
        let text = format!("{builder:?}");
        assert!(text.contains("NullObjectStore"));
        assert!(text.contains("<open>"));

        let props = builder.build().unwrap();
        let text = format!("{props:?}");
        assert!(text.contains("file:///a/b.orc"));
        assert!(text.contains("8388608"));
    }

    #[test]
    fn test_properties_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DataReaderProperties>();
        assert_send_sync::<super::DataReaderPropertiesBuilder>();
    }
}
