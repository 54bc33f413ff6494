use stockroom_core::DomainError;
use thiserror::Error;

pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input stream reached end of file.
    #[error("input closed")]
    InputClosed,

    /// A line could not be decoded (e.g. invalid UTF-8). Reported, not fatal.
    #[error("unreadable input: {0}")]
    InvalidInput(std::io::Error),

    /// The console itself failed. Fatal.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
