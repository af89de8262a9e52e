//! "null" object store: every object exists and is empty.

use std::sync::Arc;

use orcfile_io::ReadAt;

use crate::{ObjectStore, url::ObjectUrl};

/// An `ObjectStore` whose `open` always returns an empty reader.
///
/// Useful in tests and wherever a storage handle is required but never read.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObjectStore;

impl ObjectStore for NullObjectStore {
    fn open(&self, _url: &ObjectUrl) -> std::io::Result<Arc<dyn ReadAt>> {
        Ok(Arc::new(Vec::<u8>::new()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{ObjectStore, url::ObjectUrl};

    use super::NullObjectStore;

    #[test]
    fn test_null_store_open() {
        let url = ObjectUrl::parse("file:///a/b.orc").unwrap();
        let reader = NullObjectStore.open(&url).unwrap();
        assert_eq!(reader.size().unwrap(), 0);
        assert!(reader.read_at(0..16).unwrap().is_empty());
    }
}
