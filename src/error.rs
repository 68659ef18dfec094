/// Error type
#[derive(Debug)]
pub enum Error {
    /// The value handed to [`convert`](crate::convert()) was neither a
    /// non-empty string nor a finite number.
    ///
    /// Carries a rendering of the rejected value. Unparseable duration text
    /// is not an error; the parser yields [`f64::NAN`] instead.
    InvalidInput(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(value) => {
                write!(f, "not a non-empty string or a finite number: {value}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;
