use std::{
    borrow::Cow,
    fs::File,
    path::{Path, PathBuf},
    sync::Arc,
};

use orcfile_common::error::Error;
use orcfile_io::{FileReader, ReadAt};
use percent_encoding::percent_decode_str;
use url::Url;

use crate::{ObjectStore, url::ObjectUrl};

/// An `ObjectStore` serving ORC files from the local filesystem, confined to a
/// container directory.
///
/// How object URLs map onto host paths depends on the [`LocalFsMode`]:
/// in `Passthrough` mode a URL is an absolute `file:///...` URL on the host
/// and must point inside the container; in `VirtualRoot` mode the URL path is
/// interpreted relative to the container.
#[derive(Debug, Clone)]
pub struct LocalFsObjectStore {
    container_path: PathBuf,
    container_url: ObjectUrl,
    mode: LocalFsMode,
}

impl LocalFsObjectStore {
    /// Creates a store rooted at `container_path`.
    ///
    /// The container directory will be created if it does not exist.
    pub fn new(container_path: &Path, mode: LocalFsMode) -> orcfile_common::Result<Self> {
        let url = Url::from_directory_path(container_path).map_err(|()| {
            Error::invalid_arg(
                "container",
                format!("invalid path {container_path:?} for local object store"),
            )
        })?;
        let container_url = ObjectUrl::new(url)?;
        std::fs::create_dir_all(container_path)
            .map_err(|e| Error::io(format!("create container {container_path:?}"), e))?;
        Ok(LocalFsObjectStore {
            container_path: container_path.to_path_buf(),
            container_url,
            mode,
        })
    }

    /// Creates a store that is not confined to any directory: any absolute
    /// `file:///` URL on the host can be opened.
    pub fn new_unscoped() -> LocalFsObjectStore {
        LocalFsObjectStore {
            container_path: PathBuf::from("/"),
            container_url: ObjectUrl::parse("file:///").expect("parse unscoped"),
            mode: LocalFsMode::Passthrough,
        }
    }

    pub fn container_path(&self) -> &Path {
        &self.container_path
    }

    pub fn container_url(&self) -> &ObjectUrl {
        &self.container_url
    }

    pub fn mode(&self) -> LocalFsMode {
        self.mode
    }

    /// Converts an [`ObjectUrl`] to a path on the local filesystem.
    ///
    /// Percent-encoded characters of the URL path are decoded, so
    /// `file:///my%20part.orc` names the host file `my part.orc`.
    /// In `Passthrough` mode the URL must lie within the container.
    pub fn url_to_path(&self, url: &ObjectUrl) -> orcfile_common::Result<PathBuf> {
        match self.mode {
            LocalFsMode::Passthrough => {
                if self.container_url.make_relative(url).is_none() {
                    return Err(Error::invalid_arg(
                        "url",
                        format!("object url '{url}' is outside of the local fs container"),
                    ));
                }
                url.to_file_path().map_err(|()| {
                    Error::invalid_arg("url", format!("object url '{url}' is not a local file"))
                })
            }
            LocalFsMode::VirtualRoot => {
                let mut path = self.container_path.clone();
                for segment in url.path_segments().into_iter().flatten() {
                    if !segment.is_empty() {
                        let name = decode_segment(url, segment)?;
                        path.push(&*name);
                    }
                }
                Ok(path)
            }
        }
    }
}

/// Percent-decodes a single URL path segment into a file name.
///
/// A decoded segment must still be a single path component.
fn decode_segment<'a>(url: &ObjectUrl, segment: &'a str) -> orcfile_common::Result<Cow<'a, str>> {
    let name = percent_decode_str(segment).decode_utf8().map_err(|e| {
        Error::invalid_arg("url", format!("object url '{url}' is not valid utf-8: {e}"))
    })?;
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(Error::invalid_arg(
            "url",
            format!("object url '{url}' has an invalid path segment '{segment}'"),
        ));
    }
    Ok(name)
}

impl ObjectStore for LocalFsObjectStore {
    fn open(&self, url: &ObjectUrl) -> std::io::Result<Arc<dyn ReadAt>> {
        let path = self.url_to_path(url).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("open: invalid url: {e}"),
            )
        })?;
        log::debug!("opening {url} from local path {}", path.display());
        let file = File::open(path)?;
        Ok(Arc::new(FileReader::new(file)?))
    }
}

/// Defines how [`LocalFsObjectStore`] interprets object URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalFsMode {
    /// URLs are physical `file:///` URLs on the host and must reside within
    /// the container folder.
    Passthrough,
    /// The container acts as a virtual root; URL paths are relative to it.
    VirtualRoot,
}
