/// Number of symbols in an alphabet.
pub const BASE: usize = 64;

/// Bits carried by one encoded symbol.
pub const BASE_BITS: usize = 6;

/// URL-safe base64 alphabet in strict code-point order.
///
/// Fixed-width strings encoded with this alphabet sort the same way as the
/// integers (or big-endian byte buffers) they represent.
pub const LEXICOGRAPHICAL_BASE64_URL: &str =
    "-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Minimum number of symbols that hold `bytes` bytes without loss.
///
/// ```
/// use radix64::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 2);
/// assert_eq!(encoded_len(3), 4);
/// assert_eq!(encoded_len(16), 22);
/// ```
pub const fn encoded_len(bytes: usize) -> usize {
    (bytes * 8).div_ceil(BASE_BITS)
}

/// Number of bytes needed to hold the bits of `chars` symbols.
///
/// ```
/// use radix64::decoded_len;
///
/// assert_eq!(decoded_len(0), 0);
/// assert_eq!(decoded_len(2), 2);
/// assert_eq!(decoded_len(4), 3);
/// ```
pub const fn decoded_len(chars: usize) -> usize {
    (chars * BASE_BITS).div_ceil(8)
}

/// Minimum number of digits `num` takes in positional base 64. Zero takes one.
///
/// ```
/// use radix64::int_width;
///
/// assert_eq!(int_width(0), 1);
/// assert_eq!(int_width(63), 1);
/// assert_eq!(int_width(64), 2);
/// assert_eq!(int_width(u64::MAX), 11);
/// ```
pub const fn int_width(num: u64) -> usize {
    let bits = (u64::BITS - num.leading_zeros()) as usize;
    if bits == 0 {
        1
    } else {
        bits.div_ceil(BASE_BITS)
    }
}
