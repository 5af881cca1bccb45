//! Error types for alphabet construction, encoding and decoding.

use thiserror::Error;

/// An alphabet that cannot back a codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// The alphabet does not have exactly 64 symbols.
    #[error("alphabet must be 64 characters long, got {len}")]
    InvalidLength { len: usize },
    /// A symbol occurs more than once.
    #[error("alphabet has duplicate character {symbol:?} at positions {first} and {second}")]
    DuplicateSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },
}

/// An integer does not fit in the requested number of digits.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("int ({value}) does not fit in an encoded string of length {length}")]
    OutOfBounds { value: u64, length: usize },
}

/// Encoded text that cannot be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// `position` counts characters from the start of the input.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("encoded value of {input_len} characters overflows u64")]
    Overflow { input_len: usize },
}
