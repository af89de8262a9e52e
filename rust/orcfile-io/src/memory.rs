//! In-memory `ReadAt` implementations.
//!
//! Reading from `Bytes` hands out slices of the same allocation, which is how
//! zero-copy reads are served from a memory-resident ORC file.

use std::ops::Range;

use bytes::Bytes;

use crate::{ReadAt, StorageProfile, utils::clip_range, verify};

impl ReadAt for Bytes {
    fn size(&self) -> std::io::Result<u64> {
        Ok(self.len() as u64)
    }

    fn read_at(&self, range: Range<u64>) -> std::io::Result<Bytes> {
        verify!(range.end >= range.start);
        let range = clip_range(range, self.len() as u64);
        Ok(self.slice(range.start as usize..range.end as usize))
    }

    fn storage_profile(&self) -> StorageProfile {
        memory_profile(self.len())
    }
}

impl ReadAt for Vec<u8> {
    fn size(&self) -> std::io::Result<u64> {
        Ok(self.len() as u64)
    }

    fn read_at(&self, range: Range<u64>) -> std::io::Result<Bytes> {
        verify!(range.end >= range.start);
        let range = clip_range(range, self.len() as u64);
        Ok(Bytes::copy_from_slice(
            &self[range.start as usize..range.end as usize],
        ))
    }

    fn storage_profile(&self) -> StorageProfile {
        memory_profile(self.len())
    }
}

fn memory_profile(len: usize) -> StorageProfile {
    StorageProfile {
        min_io_size: 1,
        max_io_size: len.min(StorageProfile::default().max_io_size),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bytes::Bytes;

    use crate::ReadAt;

    #[test]
    fn test_vec_reader() {
        let blob = b"ORC\x00stripe".to_vec();
        assert_eq!(blob.size().unwrap(), 10);
        let buf = blob.read_at(0..3).unwrap();
        assert_eq!(buf.as_ref(), b"ORC");
        let buf = blob.read_at(4..200).unwrap();
        assert_eq!(buf.as_ref(), b"stripe");
        let buf = blob.read_at(50..60).unwrap();
        assert!(buf.is_empty());

        let blob = Arc::new(blob) as Arc<dyn ReadAt>;
        let buf = blob.read_at(0..3).unwrap();
        assert_eq!(buf.as_ref(), b"ORC");
    }

    #[test]
    fn test_bytes_reader_shares_buffer() {
        let blob = Bytes::from_static(b"ORC\x00footer");
        let buf = blob.read_at(4..10).unwrap();
        assert_eq!(buf.as_ref(), b"footer");
        assert_eq!(buf.as_ptr(), blob[4..].as_ptr());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let blob = b"abc".to_vec();
        #[allow(clippy::reversed_empty_ranges)]
        let err = blob.read_at(2..1).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_memory_profile() {
        let blob = vec![0u8; 100];
        let profile = blob.storage_profile();
        assert_eq!(profile.min_io_size, 1);
        assert_eq!(profile.max_io_size, 100);
    }
}
