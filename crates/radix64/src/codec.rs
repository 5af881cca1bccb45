//! The radix-64 codec: byte buffers and integers to and from text.

use tracing::{debug, trace};

use crate::alphabet::Alphabet;
use crate::config::CodecConfig;
use crate::constants::{decoded_len, encoded_len, int_width, BASE, LEXICOGRAPHICAL_BASE64_URL};
use crate::error::{AlphabetError, DecodeError, EncodeError};
use crate::phase::Phase;

/// Encodes and decodes with one fixed alphabet.
///
/// A codec is immutable once built, so one instance can be shared freely
/// between threads.
///
/// # Example
///
/// ```
/// use radix64::Codec;
///
/// let codec = Codec::new();
///
/// let id = codec.encode_buffer(&[0xde, 0xad, 0xbe, 0xef], None);
/// assert_eq!(id.len(), 6);
/// assert_eq!(codec.decode_to_buffer(&id, Some(4)).unwrap(), [0xde, 0xad, 0xbe, 0xef]);
///
/// let key = codec.encode_int(1_000_000, Some(6)).unwrap();
/// assert_eq!(codec.decode_to_int(&key).unwrap(), 1_000_000);
/// assert!(codec.encode_int(999, Some(6)).unwrap() < key);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    alphabet: Alphabet,
}

impl Codec {
    /// Codec over [`LEXICOGRAPHICAL_BASE64_URL`].
    pub fn new() -> Self {
        Self::from_alphabet(Alphabet::default())
    }

    /// Codec over a custom 64-character alphabet.
    ///
    /// # Errors
    ///
    /// Returns an error if `alphabet` is not 64 characters long or repeats a
    /// character.
    ///
    /// ```
    /// use radix64::Codec;
    ///
    /// assert!(Codec::with_alphabet("0123456789").is_err());
    /// let codec = Codec::with_alphabet(
    ///     "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
    /// )
    /// .unwrap();
    /// assert_eq!(codec.encode_int(0, Some(3)).unwrap(), "AAA");
    /// ```
    pub fn with_alphabet(alphabet: &str) -> Result<Self, AlphabetError> {
        Ok(Self::from_alphabet(Alphabet::new(alphabet)?))
    }

    pub fn from_alphabet(alphabet: Alphabet) -> Self {
        let is_default = alphabet.as_str() == LEXICOGRAPHICAL_BASE64_URL;
        let order_preserving = alphabet.is_sorted();
        debug!(is_default, order_preserving, "built radix64 codec");
        Self { alphabet }
    }

    pub fn from_config(config: CodecConfig) -> Self {
        Self::from_alphabet(config.alphabet)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encodes `buffer`, read as a big-endian number, into `length` symbols.
    ///
    /// Without a `length` the output is the shortest that holds every bit:
    /// `ceil(buffer.len() * 8 / 6)` symbols. A longer `length` pads on the
    /// left with the zero symbol. A shorter one drops the most-significant
    /// bits.
    ///
    /// ```
    /// use radix64::Codec;
    ///
    /// let codec = Codec::new();
    /// assert_eq!(codec.encode_buffer(&[0xff, 0xff, 0xff], None), "zzzz");
    /// assert_eq!(codec.encode_buffer(&[0xff, 0xff, 0xff], Some(2)), "zz");
    /// assert_eq!(codec.encode_buffer(&[0xff], Some(4)), "--2z");
    /// ```
    pub fn encode_buffer(&self, buffer: &[u8], length: Option<usize>) -> String {
        let minimum = encoded_len(buffer.len());
        let length = length.unwrap_or(minimum);
        if length < minimum {
            trace!(length, minimum, "truncating most-significant bits of buffer");
        }

        let mut digits = vec![0u8; length];
        let mut cursor = length;
        let mut bytes = buffer.iter().rev().copied();
        let mut phase = Phase::FIRST;
        let mut carry = 0u8;
        while cursor > 0 {
            let byte = if phase.consumes_byte() {
                match bytes.next() {
                    Some(byte) => byte,
                    None => break,
                }
            } else {
                0
            };
            let (digit, next_carry) = phase.split(byte, carry);
            carry = next_carry;
            cursor -= 1;
            digits[cursor] = digit;
            phase = phase.next();
        }

        // Buffer ran out mid-group: the carried high bits still need a symbol.
        if phase != Phase::FIRST && cursor > 0 {
            cursor -= 1;
            digits[cursor] = carry;
        }

        self.to_text(&digits)
    }

    /// Encodes `num` in positional base 64, most-significant digit first.
    ///
    /// Without a `length` the output has the minimum number of digits, which
    /// is one for zero.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::OutOfBounds` if `num >= 64^length`.
    ///
    /// ```
    /// use radix64::Codec;
    ///
    /// let codec = Codec::new();
    /// assert_eq!(codec.encode_int(0, None).unwrap(), "-");
    /// assert_eq!(codec.encode_int(64, None).unwrap(), "0-");
    /// assert_eq!(codec.encode_int(64, Some(4)).unwrap(), "--0-");
    /// assert!(codec.encode_int(64, Some(1)).is_err());
    /// ```
    pub fn encode_int(&self, num: u64, length: Option<usize>) -> Result<String, EncodeError> {
        let minimum = int_width(num);
        let length = match length {
            // zero is the one value below 64^0
            Some(length) if length < minimum && num > 0 => {
                return Err(EncodeError::OutOfBounds { value: num, length });
            }
            Some(length) => length,
            None => minimum,
        };

        let mut digits = vec![0u8; length];
        let mut cursor = length;
        let mut rest = num;
        while rest > 0 {
            cursor -= 1;
            digits[cursor] = (rest % BASE as u64) as u8;
            rest /= BASE as u64;
        }

        Ok(self.to_text(&digits))
    }

    /// Decodes `encoded` into a `bytes`-long big-endian buffer.
    ///
    /// Without `bytes` the buffer is `ceil(chars * 6 / 8)` bytes long.
    /// Leading bytes that receive no bits are zero. Bits that do not fit in
    /// the buffer are dropped from the most-significant end.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::InvalidCharacter` if any character of `encoded`
    /// is outside the alphabet, including characters whose bits are dropped.
    /// The leftmost invalid character is reported, as in `decode_to_int`.
    ///
    /// ```
    /// use radix64::Codec;
    ///
    /// let codec = Codec::new();
    /// assert_eq!(codec.decode_to_buffer("zzzz", None).unwrap(), [0xff, 0xff, 0xff]);
    /// assert_eq!(codec.decode_to_buffer("2z", Some(1)).unwrap(), [0xff]);
    /// assert_eq!(codec.decode_to_buffer("2z", Some(3)).unwrap(), [0x00, 0x00, 0xff]);
    /// assert!(codec.decode_to_buffer("2+", None).is_err());
    /// ```
    pub fn decode_to_buffer(
        &self,
        encoded: &str,
        bytes: Option<usize>,
    ) -> Result<Vec<u8>, DecodeError> {
        let chars = encoded.chars().count();
        let size = bytes.unwrap_or_else(|| decoded_len(chars));
        if chars > encoded_len(size) {
            trace!(chars, size, "truncating most-significant bits of encoded text");
        }

        let mut buffer = vec![0u8; size];
        let mut cursor = size;
        let mut phase = Phase::FIRST;
        let mut invalid = None;
        for (offset, character) in encoded.chars().rev().enumerate() {
            let digit = match self.digit(character, chars - 1 - offset) {
                Ok(digit) => digit,
                Err(err) => {
                    invalid = Some(err);
                    continue;
                }
            };
            if cursor == 0 || invalid.is_some() {
                continue;
            }
            let (current, next) = phase.merge(digit);
            buffer[cursor - 1] |= current;
            if phase.completes_byte() {
                cursor -= 1;
                if let (Some(next), true) = (next, cursor > 0) {
                    buffer[cursor - 1] = next;
                }
            }
            phase = phase.next();
        }

        match invalid {
            Some(err) => Err(err),
            None => Ok(buffer),
        }
    }

    /// Decodes positional base-64 text, most-significant digit first.
    ///
    /// The empty string decodes to zero. Leading zero symbols are accepted.
    ///
    /// # Errors
    ///
    /// - `DecodeError::InvalidCharacter` if a character is outside the alphabet
    /// - `DecodeError::Overflow` if the value does not fit in a `u64`
    ///
    /// ```
    /// use radix64::Codec;
    ///
    /// let codec = Codec::new();
    /// assert_eq!(codec.decode_to_int("0-").unwrap(), 64);
    /// assert_eq!(codec.decode_to_int("----0-").unwrap(), 64);
    /// assert!(codec.decode_to_int("zzzzzzzzzzzz").is_err());
    /// ```
    pub fn decode_to_int(&self, encoded: &str) -> Result<u64, DecodeError> {
        let mut num = 0u64;
        for (position, character) in encoded.chars().enumerate() {
            let digit = self.digit(character, position)?;
            num = num
                .checked_mul(BASE as u64)
                .and_then(|num| num.checked_add(u64::from(digit)))
                .ok_or_else(|| DecodeError::Overflow {
                    input_len: encoded.chars().count(),
                })?;
        }
        Ok(num)
    }

    #[inline]
    fn digit(&self, character: char, position: usize) -> Result<u8, DecodeError> {
        self.alphabet
            .index_of(character)
            .ok_or(DecodeError::InvalidCharacter {
                character,
                position,
            })
    }

    fn to_text(&self, digits: &[u8]) -> String {
        let symbols = self.alphabet.symbols();
        digits.iter().map(|&digit| symbols[digit as usize]).collect()
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl From<CodecConfig> for Codec {
    fn from(config: CodecConfig) -> Self {
        Self::from_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference: the buffer as a big-endian number, in base 64, right-aligned.
    fn reference_digits(buffer: &[u8], length: usize) -> Vec<u8> {
        let mut bits: Vec<bool> = buffer
            .iter()
            .flat_map(|byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
            .collect();
        let width = length * 6;
        if bits.len() > width {
            bits.drain(..bits.len() - width);
        } else {
            let mut padded = vec![false; width - bits.len()];
            padded.extend(bits);
            bits = padded;
        }
        bits.chunks(6)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8))
            .collect()
    }

    #[test]
    fn encode_buffer_matches_positional_reference() {
        let codec = Codec::new();
        let buffers: [&[u8]; 6] = [
            &[],
            &[0x00],
            &[0x01],
            &[0xff, 0x00],
            &[0x12, 0x34, 0x56, 0x78],
            &[0xde, 0xad, 0xbe, 0xef, 0xca, 0xfe, 0xba],
        ];
        for buffer in buffers {
            for length in 1..=12 {
                let expected = codec.to_text(&reference_digits(buffer, length));
                assert_eq!(
                    codec.encode_buffer(buffer, Some(length)),
                    expected,
                    "buffer {:?} length {}",
                    buffer,
                    length
                );
            }
        }
    }

    #[test]
    fn encode_buffer_default_width() {
        let codec = Codec::new();
        assert_eq!(codec.encode_buffer(&[], None), "");
        assert_eq!(codec.encode_buffer(&[0x00], None), "--");
        assert_eq!(codec.encode_buffer(&[0x01], None), "-0");
        assert_eq!(codec.encode_buffer(&[0xff], None), "2z");
        assert_eq!(codec.encode_buffer(&[0x00, 0x00], None), "---");
        assert_eq!(codec.encode_buffer(&[0xff, 0xff, 0xff], None), "zzzz");
    }

    #[test]
    fn zero_width_is_exact() {
        let codec = Codec::new();
        assert_eq!(codec.encode_buffer(&[0xff], Some(0)), "");
        assert_eq!(codec.encode_int(0, Some(0)).unwrap(), "");
        assert!(codec.encode_int(64, Some(0)).is_err());
        assert!(codec.encode_int(1, Some(0)).is_err());
        assert_eq!(codec.decode_to_buffer("zzzz", Some(0)).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn empty_buffer_round_trips_through_padded_text() {
        let codec = Codec::new();
        for length in 0..8 {
            let encoded = codec.encode_buffer(&[], Some(length));
            assert_eq!(encoded.len(), length);
            assert_eq!(
                codec.decode_to_buffer(&encoded, Some(0)).unwrap(),
                Vec::<u8>::new(),
                "length {}",
                length
            );
        }
    }

    #[test]
    fn empty_buffer_pads_with_zero_symbol() {
        let codec = Codec::new();
        assert_eq!(codec.encode_buffer(&[], Some(3)), "---");
    }

    #[test]
    fn encode_int_digits() {
        let codec = Codec::new();
        assert_eq!(codec.encode_int(0, None).unwrap(), "-");
        assert_eq!(codec.encode_int(1, None).unwrap(), "0");
        assert_eq!(codec.encode_int(63, None).unwrap(), "z");
        assert_eq!(codec.encode_int(64, None).unwrap(), "0-");
        assert_eq!(codec.encode_int(4095, None).unwrap(), "zz");
        assert_eq!(codec.encode_int(4096, None).unwrap(), "0--");
        assert_eq!(codec.encode_int(u64::MAX, None).unwrap(), "Ezzzzzzzzzz");
    }

    #[test]
    fn encode_int_bounds() {
        let codec = Codec::new();
        assert_eq!(
            codec.encode_int(64, Some(1)).unwrap_err(),
            EncodeError::OutOfBounds {
                value: 64,
                length: 1
            }
        );
        assert!(codec.encode_int(4096, Some(2)).is_err());
        assert_eq!(codec.encode_int(4095, Some(2)).unwrap(), "zz");
        assert_eq!(codec.encode_int(u64::MAX, Some(11)).unwrap().len(), 11);
        assert_eq!(codec.encode_int(u64::MAX, Some(16)).unwrap().len(), 16);
    }

    #[test]
    fn decode_to_buffer_partial_groups() {
        let codec = Codec::new();
        assert_eq!(codec.decode_to_buffer("", None).unwrap(), Vec::<u8>::new());
        assert_eq!(codec.decode_to_buffer("2z", None).unwrap(), [0x00, 0xff]);
        assert_eq!(codec.decode_to_buffer("-0", Some(1)).unwrap(), [0x01]);
        assert_eq!(codec.decode_to_buffer("z", Some(2)).unwrap(), [0x00, 0x3f]);
    }

    #[test]
    fn decode_to_buffer_truncates_most_significant_bits() {
        let codec = Codec::new();
        assert_eq!(codec.decode_to_buffer("zzzz", Some(1)).unwrap(), [0xff]);
        assert_eq!(codec.decode_to_buffer("zzzz", Some(2)).unwrap(), [0xff, 0xff]);
    }

    #[test]
    fn decode_reports_character_position() {
        let codec = Codec::new();
        assert_eq!(
            codec.decode_to_buffer("ab+d", None).unwrap_err(),
            DecodeError::InvalidCharacter {
                character: '+',
                position: 2
            }
        );
        assert_eq!(
            codec.decode_to_int("ab/d").unwrap_err(),
            DecodeError::InvalidCharacter {
                character: '/',
                position: 2
            }
        );
    }

    #[test]
    fn decode_reports_leftmost_invalid_character() {
        let codec = Codec::new();
        let expected = DecodeError::InvalidCharacter {
            character: '+',
            position: 2,
        };
        assert_eq!(codec.decode_to_buffer("ab+/", None).unwrap_err(), expected);
        assert_eq!(codec.decode_to_int("ab+/").unwrap_err(), expected);
    }

    #[test]
    fn decode_validates_truncated_prefix() {
        let codec = Codec::new();
        assert!(matches!(
            codec.decode_to_buffer("*zzzz", Some(1)),
            Err(DecodeError::InvalidCharacter { character: '*', position: 0 })
        ));
    }

    #[test]
    fn decode_to_int_limits() {
        let codec = Codec::new();
        assert_eq!(codec.decode_to_int("").unwrap(), 0);
        assert_eq!(codec.decode_to_int("Ezzzzzzzzzz").unwrap(), u64::MAX);
        assert_eq!(
            codec.decode_to_int("F----------").unwrap_err(),
            DecodeError::Overflow { input_len: 11 }
        );
        assert_eq!(codec.decode_to_int("-----------------0").unwrap(), 1);
    }
}
