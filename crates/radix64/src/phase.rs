//! The four-phase carry cycle shared by the buffer encoder and decoder.
//!
//! Four symbols hold exactly three bytes. Walking both sides from their
//! least-significant end, the symbol at position `i` (1-based from the end)
//! is in phase `i mod 4`:
//!
//! ```text
//! bytes:    b0       b1       b2
//! bits:     aaaaaabb bbbbcccc ccdddddd
//! symbols:  a = Carry, b = Low2, c = Low4, d = Low6
//! ```
//!
//! The bits of a byte that do not fit in the current symbol are carried into
//! the next one.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Takes a byte, emits its low 6 bits, carries its high 2.
    Low6,
    /// Takes a byte, emits its low 4 bits above a 2-bit carry, carries its high 4.
    Low4,
    /// Takes a byte, emits its low 2 bits above a 4-bit carry, carries its high 6.
    Low2,
    /// Takes no byte, emits the 6-bit carry.
    Carry,
}

impl Phase {
    pub(crate) const FIRST: Phase = Phase::Low6;

    #[inline]
    pub(crate) fn next(self) -> Self {
        match self {
            Phase::Low6 => Phase::Low4,
            Phase::Low4 => Phase::Low2,
            Phase::Low2 => Phase::Carry,
            Phase::Carry => Phase::Low6,
        }
    }

    #[inline]
    pub(crate) fn consumes_byte(self) -> bool {
        self != Phase::Carry
    }

    /// Encoding step: combines `byte` with the pending `carry` into a digit,
    /// returning the digit and the new carry.
    ///
    /// In the `Carry` phase `byte` is ignored.
    #[inline]
    pub(crate) fn split(self, byte: u8, carry: u8) -> (u8, u8) {
        match self {
            Phase::Low6 => (byte & 0x3f, byte >> 6),
            Phase::Low4 => (((byte & 0x0f) << 2) | carry, byte >> 4),
            Phase::Low2 => (((byte & 0x03) << 4) | carry, byte >> 2),
            Phase::Carry => (carry, 0),
        }
    }

    /// Decoding step: splits `digit` into the bits it contributes to the byte
    /// being assembled and, when that byte is completed by this digit and
    /// bits are left over, the initial value of the next (more significant)
    /// byte.
    #[inline]
    pub(crate) fn merge(self, digit: u8) -> (u8, Option<u8>) {
        match self {
            Phase::Low6 => (digit, None),
            Phase::Low4 => ((digit & 0x03) << 6, Some(digit >> 2)),
            Phase::Low2 => ((digit & 0x0f) << 4, Some(digit >> 4)),
            Phase::Carry => (digit << 2, None),
        }
    }

    /// Whether the byte being assembled is complete after a decoding step.
    #[inline]
    pub(crate) fn completes_byte(self) -> bool {
        self != Phase::Low6
    }
}
