use std::{fs::File, ops::Range, path::Path};

use bytes::{Bytes, BytesMut};

use crate::{ReadAt, StorageProfile, utils::clip_range, verify};

/// Positional reader over a local ORC file.
///
/// The size is taken when the reader is created; ORC files are immutable
/// once written.
pub struct FileReader {
    file: File,
    size: u64,
    #[cfg(not(unix))]
    cursor: std::sync::Mutex<()>,
}

impl FileReader {
    pub fn new(file: File) -> std::io::Result<FileReader> {
        let size = file.metadata()?.len();
        Ok(FileReader {
            file,
            size,
            #[cfg(not(unix))]
            cursor: Default::default(),
        })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<FileReader> {
        FileReader::new(File::open(path)?)
    }

    #[cfg(unix)]
    fn read_exact_at(&self, buf: &mut [u8], pos: u64) -> std::io::Result<()> {
        std::os::unix::fs::FileExt::read_exact_at(&self.file, buf, pos)
    }

    /// Without positional reads the shared cursor is moved under a lock.
    #[cfg(not(unix))]
    fn read_exact_at(&self, buf: &mut [u8], pos: u64) -> std::io::Result<()> {
        use std::io::{Read, Seek, SeekFrom};

        let _guard = self
            .cursor
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut file = &self.file;
        file.seek(SeekFrom::Start(pos))?;
        file.read_exact(buf)
    }
}

impl ReadAt for FileReader {
    fn size(&self) -> std::io::Result<u64> {
        Ok(self.size)
    }

    fn read_at(&self, range: Range<u64>) -> std::io::Result<Bytes> {
        verify!(range.end >= range.start);
        let range = clip_range(range, self.size);
        if range.is_empty() {
            return Ok(Bytes::new());
        }
        let mut buf = BytesMut::zeroed((range.end - range.start) as usize);
        self.read_exact_at(&mut buf, range.start)?;
        Ok(buf.freeze())
    }

    fn storage_profile(&self) -> StorageProfile {
        StorageProfile {
            min_io_size: 16 * 1024,
            max_io_size: 1024 * 1024,
        }
    }
}
