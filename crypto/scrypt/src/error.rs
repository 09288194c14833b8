use core::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A cost parameter is outside its domain (`N` not a power of two above
    /// one, or a zero `r`/`p`).
    InvalidParameter(&'static str),
    /// The parameters are valid in principle but their buffers would exceed
    /// the supported size ceiling.
    ParametersTooLarge,
    /// The requested output is empty or longer than PBKDF2 can produce.
    InvalidOutputLength,
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidParameter(reason) => write!(f, "scrypt: {reason}"),
            Self::ParametersTooLarge => f.write_str("scrypt: parameters are too large"),
            Self::InvalidOutputLength => f.write_str("scrypt: invalid output length"),
        }
    }
}

impl std::error::Error for Error {}
