//! Validated 64-symbol alphabets and their reverse lookup.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{BASE, LEXICOGRAPHICAL_BASE64_URL};
use crate::error::AlphabetError;

const ABSENT: u8 = u8::MAX;

/// An ordered set of exactly 64 distinct symbols.
///
/// The symbol at index `i` encodes the digit `i`. The reverse map is built
/// once here and shared by every decode call of the owning codec.
///
/// ```
/// use radix64::Alphabet;
///
/// let alphabet = Alphabet::default();
/// assert_eq!(alphabet.symbol(0), Some('-'));
/// assert_eq!(alphabet.symbol(64), None);
/// assert_eq!(alphabet.index_of('z'), Some(63));
/// assert_eq!(alphabet.index_of('+'), None);
/// assert!(alphabet.is_sorted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    text: String,
    symbols: [char; BASE],
    ascii: [u8; 128],
    extended: HashMap<char, u8>,
}

impl Alphabet {
    /// Validates `symbols` and builds the reverse map.
    ///
    /// # Errors
    ///
    /// - `AlphabetError::InvalidLength` if `symbols` is not 64 characters long
    /// - `AlphabetError::DuplicateSymbol` if a character repeats
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        let chars: Vec<char> = symbols.chars().collect();
        let table: [char; BASE] = chars
            .try_into()
            .map_err(|chars: Vec<char>| AlphabetError::InvalidLength { len: chars.len() })?;

        let mut ascii = [ABSENT; 128];
        let mut extended = HashMap::new();
        for (index, &symbol) in table.iter().enumerate() {
            let digit = index as u8;
            let previous = if symbol.is_ascii() {
                let slot = &mut ascii[symbol as usize];
                let previous = (*slot != ABSENT).then_some(*slot);
                *slot = digit;
                previous
            } else {
                extended.insert(symbol, digit)
            };
            if let Some(first) = previous {
                return Err(AlphabetError::DuplicateSymbol {
                    symbol,
                    first: first as usize,
                    second: index,
                });
            }
        }

        Ok(Self {
            text: symbols.to_string(),
            symbols: table,
            ascii,
            extended,
        })
    }

    /// Symbol for `digit`, or `None` if `digit` is 64 or more.
    #[inline]
    pub fn symbol(&self, digit: u8) -> Option<char> {
        self.symbols.get(digit as usize).copied()
    }

    /// Digit for `symbol`, or `None` if it is not part of the alphabet.
    #[inline]
    pub fn index_of(&self, symbol: char) -> Option<u8> {
        if symbol.is_ascii() {
            let digit = self.ascii[symbol as usize];
            (digit != ABSENT).then_some(digit)
        } else {
            self.extended.get(&symbol).copied()
        }
    }

    /// Whether symbols are in strictly ascending code-point order, which makes
    /// fixed-width encodings sort like the values they encode.
    pub fn is_sorted(&self) -> bool {
        self.symbols.windows(2).all(|pair| pair[0] < pair[1])
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn symbols(&self) -> &[char; BASE] {
        &self.symbols
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(LEXICOGRAPHICAL_BASE64_URL).expect("default alphabet has 64 distinct symbols")
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = AlphabetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.text
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
