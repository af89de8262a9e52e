//! Object URLs: the location of an ORC file (or of the container holding it)
//! within an `ObjectStore`.
//!
//! All URLs handled here must be valid, clean and canonical:
//! - no credentials in the authority component,
//! - no query and no fragment component,
//! - no path traversal sequences,
//! - absolute, in the form `scheme ":" ["//" authority] path`.
//!
//! A URL whose path ends with a slash ("/") denotes a "container" (a folder).
//! Otherwise the last path segment names an object within its container.

use std::borrow::Cow;

use orcfile_common::error::{Error, ErrorKind};
use url::Url;

macro_rules! verify {
    ($expr:expr, $url:expr) => {{
        let result = $expr;
        verify(result, stringify!($expr), $url)?;
    }};
}

/// A URL that has been parsed and verified according to the `ObjectStore` rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectUrl(Url);

impl ObjectUrl {
    /// Creates a new `ObjectUrl` from a `Url` after verifying it.
    pub fn new(url: Url) -> orcfile_common::Result<ObjectUrl> {
        Self::verify_url(&url)?;
        Ok(Self(url))
    }

    /// Parses and verifies a URL string.
    ///
    /// The string must already be in canonical form: re-serializing the parsed
    /// URL has to reproduce it exactly. This rejects path traversals and other
    /// forms the parser would silently normalize.
    pub fn parse(url_str: &str) -> orcfile_common::Result<ObjectUrl> {
        let url = parse_url(url_str)?;
        Self::verify_url(&url)?;
        verify!(url.as_str() == url_str, url_str);
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the last path segment, or `None` for a container URL.
    pub fn file_name(&self) -> Option<&str> {
        if self.is_container() {
            return None;
        }
        self.path_segments()?.next_back()
    }

    /// Makes `url` relative to the container of this URL.
    ///
    /// Returns `None` if `url` is itself a container or lies outside of this
    /// container.
    pub fn make_relative(&self, url: &ObjectUrl) -> Option<String> {
        if url.is_container() {
            return None;
        }

        let container = self.get_container().ok()?;
        if url.as_str().starts_with(container.as_str()) {
            container.0.make_relative(url)
        } else {
            None
        }
    }

    /// Returns the container URL for this URL (`self` if it is a container already).
    pub fn get_container(&self) -> orcfile_common::Result<Cow<'_, ObjectUrl>> {
        if self.is_container() {
            Ok(Cow::Borrowed(self))
        } else {
            let parent_url = self
                .join("./")
                .map_err(|_e| make_err("failed to determine parent", self.as_str()))?;
            Ok(Cow::Owned(ObjectUrl(parent_url)))
        }
    }

    pub fn is_container(&self) -> bool {
        self.path().ends_with('/')
    }

    /// Verifies that the given `Url` is valid according to `ObjectStore` rules.
    pub fn verify_url(url: &Url) -> orcfile_common::Result<()> {
        verify!(url.username().is_empty(), url.as_str());
        verify!(url.password().is_none(), url.as_str());
        verify!(url.query().is_none(), url.as_str());
        verify!(url.fragment().is_none(), url.as_str());
        verify!(url.path_segments().is_some(), url.as_str());
        verify!(url.path().starts_with('/'), url.as_str());
        Ok(())
    }
}

impl std::ops::Deref for ObjectUrl {
    type Target = Url;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ObjectUrl {
    type Error = Error;

    fn try_from(url_str: &str) -> Result<Self, Self::Error> {
        ObjectUrl::parse(url_str)
    }
}

fn parse_url(url: &str) -> orcfile_common::Result<Url> {
    Url::parse(url).map_err(|e| {
        ErrorKind::ResolveUrl {
            url: url.to_string(),
            reason: format!("failed to parse url, error: {e}"),
        }
        .into()
    })
}

fn verify(predicate: bool, condition: &str, url: &str) -> orcfile_common::Result<()> {
    if predicate {
        Ok(())
    } else {
        Err(make_err(condition, url))
    }
}

fn make_err(reason: &str, url: &str) -> Error {
    ErrorKind::ResolveUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
