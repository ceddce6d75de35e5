//! Editor errors.
//!
//! All of these are fatal: `main` hands them to `kilo_term::terminal::die`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Editor error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The file named on the command line could not be opened.
    #[error("{}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a line from an opened file failed.
    #[error("{}: read failed: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Terminal failure (raw mode, geometry, key input).
    #[error(transparent)]
    Term(#[from] kilo_term::Error),

    /// Writing a frame or the quit sequence failed.
    #[error("write: {0}")]
    Write(#[from] io::Error),
}

/// Result type for editor operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_names_the_file() {
        let err = Error::Open {
            path: PathBuf::from("/no/such/file.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("/no/such/file.txt: "));
    }

    #[test]
    fn term_error_is_transparent() {
        let err: Error = kilo_term::Error::WindowSize("no reply").into();
        assert_eq!(err.to_string(), "getWindowSize: no reply");
    }
}
