//! Serializable codec settings.

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;

/// Settings a [`Codec`](crate::Codec) is built from.
///
/// Any serde format works. A missing `alphabet` selects the default
/// lexicographical alphabet, and an invalid one fails deserialization.
///
/// ```
/// use radix64::{Codec, CodecConfig};
///
/// let config: CodecConfig = serde_json::from_str("{}").unwrap();
/// let codec = Codec::from_config(config);
/// assert_eq!(codec.encode_int(1, Some(2)).unwrap(), "-0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    pub alphabet: Alphabet,
}

impl CodecConfig {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }
}
