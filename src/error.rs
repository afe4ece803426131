use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

/// The possible errors raised while parsing an API representation
#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error("missing required field \"{0}\"")]
    MissingField(&'static str),
    #[error("invalid value for field \"{field}\", expected {expected}")]
    InvalidValue {
        field: &'static str,
        expected: &'static str,
    },
}
