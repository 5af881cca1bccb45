//! Bijective radix-64 encoding with custom alphabets.
//!
//! A [`Codec`] converts fixed-width byte buffers and non-negative integers to
//! and from strings over a 64-symbol alphabet:
//!
//! - byte buffers are read as big-endian numbers and packed six bits per
//!   symbol from the least-significant end, with optional truncation or
//!   zero padding to a requested width
//! - integers use positional base 64, most-significant digit first
//!
//! With the default alphabet, [`LEXICOGRAPHICAL_BASE64_URL`], symbols are in
//! code-point order, so fixed-width encodings sort like the values they
//! encode. That makes them usable as short IDs and sortable keys.
//!
//! # Example
//!
//! ```
//! use radix64::Codec;
//!
//! let codec = Codec::new();
//!
//! let a = codec.encode_int(41, Some(4)).unwrap();
//! let b = codec.encode_int(42, Some(4)).unwrap();
//! assert!(a < b);
//! assert_eq!(codec.decode_to_int(&b).unwrap(), 42);
//!
//! let encoded = codec.encode_buffer(b"key", None);
//! assert_eq!(codec.decode_to_buffer(&encoded, Some(3)).unwrap(), b"key");
//! ```

mod alphabet;
mod codec;
mod config;
mod constants;
mod error;
mod phase;

pub use alphabet::Alphabet;
pub use codec::Codec;
pub use config::CodecConfig;
pub use constants::{
    decoded_len, encoded_len, int_width, BASE, BASE_BITS, LEXICOGRAPHICAL_BASE64_URL,
};
pub use error::{AlphabetError, DecodeError, EncodeError};
