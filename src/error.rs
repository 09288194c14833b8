use std::fmt::{Debug, Display};

pub enum Error {
    InvalidField(&'static str),
    InvalidParameter(&'static str),
    MissingField(&'static str),
    Scrypt(scrypt::Error),
    Toml(toml::de::Error),
}

/// The broad class of an [`Error`], independent of which layer raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A cost parameter or the key length is outside its domain.
    InvalidParameter,
    /// The cost parameters would need buffers above the supported ceiling.
    ParametersTooLarge,
    /// The configuration document could not be used.
    Config,
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter(_)
            | Self::Scrypt(scrypt::Error::InvalidParameter(_) | scrypt::Error::InvalidOutputLength) => {
                ErrorKind::InvalidParameter
            }
            Self::Scrypt(scrypt::Error::ParametersTooLarge) => ErrorKind::ParametersTooLarge,
            Self::InvalidField(_) | Self::MissingField(_) | Self::Toml(_) => ErrorKind::Config,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidField(field) => write!(f, "invalid value for config field `{field}`"),
            Self::InvalidParameter(reason) => f.write_str(reason),
            Self::MissingField(field) => write!(f, "missing required config field `{field}`"),
            Self::Scrypt(e) => Display::fmt(e, f),
            Self::Toml(e) => write!(f, "could not parse TOML config: {e}"),
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scrypt(e) => Some(e),
            Self::Toml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<scrypt::Error> for Error {
    fn from(value: scrypt::Error) -> Self {
        Self::Scrypt(value)
    }
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Self::Toml(value)
    }
}
