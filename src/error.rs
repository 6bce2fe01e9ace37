use thiserror::Error;

/// Failures surfaced to the caller. Encoding is deterministic, so none of
/// these go away on retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed `(AI)value` syntax.
    #[error("Format error: {message}")]
    Format { message: String },

    /// A segment value holds characters that cannot be encoded as digits.
    #[error("Encode error: {message}")]
    Encode { message: String },

    /// The requested pixel width cannot hold one pixel per module.
    #[error("Render error: {width}px is too narrow for {modules} modules")]
    Render { width: u32, modules: usize },
}

impl Error {
    pub(crate) fn format(message: impl Into<String>) -> Self {
        Error::Format { message: message.into() }
    }

    pub(crate) fn encode(message: impl Into<String>) -> Self {
        Error::Encode { message: message.into() }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
