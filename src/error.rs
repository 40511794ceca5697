use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while patching package metadata
#[derive(Debug)]
pub enum PatcherError {
    /// Package directory is missing or not a directory
    DirectoryNotFound(PathBuf),
    /// Failed to write one of the metadata files
    Write { path: PathBuf, source: io::Error },
}

impl PatcherError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PatcherError::DirectoryNotFound(_) => 1,
            PatcherError::Write { .. } => 2,
        }
    }
}

impl fmt::Display for PatcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatcherError::DirectoryNotFound(path) => {
                write!(f, "package directory {} does not exist", path.display())
            }
            PatcherError::Write { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for PatcherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatcherError::Write { source, .. } => Some(source),
            PatcherError::DirectoryNotFound(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn missing_directory_message_names_path() {
        let err = PatcherError::DirectoryNotFound(PathBuf::from("/tmp/missing"));

        assert_eq!(err.to_string(), "package directory /tmp/missing does not exist");
        assert_eq!(err.exit_code(), 1);
        assert!(err.source().is_none());
    }

    #[test]
    fn write_error_keeps_io_source() {
        let err = PatcherError::Write {
            path: PathBuf::from("/pkg/README.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };

        assert_eq!(err.to_string(), "failed to write /pkg/README.md: permission denied");
        assert_eq!(err.exit_code(), 2);
        assert!(err.source().is_some());
    }
}
