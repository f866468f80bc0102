//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (unit key resolution,
//! textual decoding, coordinate codec issues).
use thiserror_no_std::Error;

#[derive(Error, Debug)]
/// Errors raised while resolving a unit or codec variant from a key string.
pub enum UnitError {
    /// The key matched no variant of the family.
    #[error("Unknown unit key for family {family}")]
    UnknownUnit { family: &'static str },
}

//================================================================================PARSE_ERROR

#[derive(Error, Debug)]
/// Failures while decoding textual representations (hex, decimal).
pub enum ParseError {
    /// Input length does not match the encoding.
    #[error("Invalid length: expected {expected} characters, got {found}")]
    InvalidLength { expected: usize, found: usize },
    /// A character that should be a hex digit is not one.
    #[error("Invalid hex digit at position {position}")]
    InvalidHexDigit { position: usize },
    /// A character at a fixed separator position is neither ':' nor '-'.
    #[error("Invalid separator at position {position}")]
    InvalidSeparator { position: usize },
    /// Decimal text could not be decoded as a number.
    #[error("Malformed decimal number")]
    MalformedNumber,
}

//================================================================================CODEC_ERROR

#[derive(Error, Debug)]
/// Errors raised by the coordinate codec family.
pub enum CodecError {
    /// A coordinate field could not be decoded.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The selected codec variant has no implemented behavior.
    #[error("Unsupported operation: {what}")]
    Unsupported { what: &'static str },
    /// A formatted field exceeded the bounded output capacity.
    #[error("Formatted field exceeds output capacity")]
    FieldOverflow,
}
