use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// Reports an incomplete reader configuration.
    ///
    /// Both arguments carry the *current* values of the two mandatory fields,
    /// `None` standing for a field that was never set.
    pub fn missing_required_field(file_system: Option<String>, path: Option<String>) -> Error {
        Error(ErrorKind::MissingRequiredField { file_system, path }.into())
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }

    /// Returns `true` if this is a [`ErrorKind::MissingRequiredField`] error.
    pub fn is_missing_required_field(&self) -> bool {
        matches!(self.kind(), ErrorKind::MissingRequiredField { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error(
        "missing required field: fileSystem = {}, path = {}",
        or_null(file_system),
        or_null(path)
    )]
    MissingRequiredField {
        file_system: Option<String>,
        path: Option<String>,
    },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("failed to resolve url '{url}', reason: {reason}")]
    ResolveUrl { url: String, reason: String },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

fn or_null(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("null")
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn test_missing_required_field_message() {
        let err = Error::missing_required_field(None, Some("file:///a/b.orc".to_string()));
        assert!(err.is_missing_required_field());
        assert_eq!(
            err.to_string(),
            "missing required field: fileSystem = null, path = file:///a/b.orc"
        );

        let err = Error::missing_required_field(None, None);
        assert_eq!(
            err.to_string(),
            "missing required field: fileSystem = null, path = null"
        );
    }

    #[test]
    fn test_into_kind() {
        let err = Error::invalid_arg("compression", "unknown kind");
        assert!(!err.is_missing_required_field());
        match err.into_kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "compression");
                assert_eq!(message, "unknown kind");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let err: Error = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert!(matches!(err.kind(), ErrorKind::Io { .. }));
    }

    #[test]
    fn test_io_error_message() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::io("open file:///a/b.orc", source);
        assert_eq!(
            err.to_string(),
            "IO error for 'open file:///a/b.orc': no such file"
        );
    }
}
