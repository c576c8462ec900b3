use thiserror::Error;

/// Result type for strcaseto-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {stream}")]
    Io {
        stream: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error for the named stream
    pub fn io(stream: &'static str, source: std::io::Error) -> Self {
        Error::Io { stream, source }
    }
}
