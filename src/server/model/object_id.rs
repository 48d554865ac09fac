//! Opaque document identifiers.
//!
//! Boards and cards are keyed by 12-byte identifiers rendered as 24 lowercase hex
//! characters. The first four bytes hold the big-endian creation time in seconds, the
//! remaining eight are random, so identifiers are unique without a central counter.

use std::{fmt, str::FromStr};

use chrono::Utc;

use crate::server::error::identifier::IdentifierError;

/// Length of an identifier in bytes.
const ID_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; ID_LEN]);

impl ObjectId {
    /// Generates a fresh identifier for a document about to be inserted.
    pub fn new() -> Self {
        let mut bytes = [0u8; ID_LEN];
        let seconds = Utc::now().timestamp() as u32;
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..].copy_from_slice(&rand::random::<[u8; 8]>());
        Self(bytes)
    }

    /// Parses an identifier from its hex form.
    ///
    /// Upper and lower case hex digits are both accepted; the value is always rendered
    /// back in lowercase.
    ///
    /// # Returns
    /// - `Ok(ObjectId)` - The value is exactly 24 hex characters
    /// - `Err(IdentifierError::Malformed)` - Wrong length or a non-hex character
    pub fn parse_str(value: &str) -> Result<Self, IdentifierError> {
        let mut bytes = [0u8; ID_LEN];
        hex::decode_to_slice(value, &mut bytes).map_err(|source| IdentifierError::Malformed {
            value: value.to_string(),
            source,
        })?;
        Ok(Self(bytes))
    }

    /// Renders the identifier as 24 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ObjectId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
