//! 32-byte account and asset address.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AmmError;

/// A 32-byte address naming a principal, an asset mint, or an account.
///
/// Addresses are rendered and parsed as base58 text, the form external
/// clients use when constructing calls. All 32-byte sequences are valid.
///
/// # Examples
///
/// ```
/// use hydra_pool::domain::Address;
///
/// let addr = Address::new([7u8; 32]);
/// let text = addr.to_string();
/// assert_eq!(text.parse::<Address>().expect("valid base58"), addr);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; 32]);

impl Address {
    /// Creates an address from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Builds a well-known address from an ASCII label, zero-padded to 32
    /// bytes. Labels longer than 32 bytes are truncated.
    #[must_use]
    pub const fn from_label(label: &[u8]) -> Self {
        let mut bytes = [0u8; 32];
        let mut i = 0;
        while i < label.len() && i < 32 {
            bytes[i] = label[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Returns the all-zero address.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` if every byte is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Borrows the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns a copy of the underlying bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = bs58::decode(s)
            .into_vec()
            .map_err(|e| AmmError::InvalidAddress(e.to_string()))?;
        let bytes = <[u8; 32]>::try_from(raw.as_slice()).map_err(|_| {
            AmmError::InvalidAddress(format!("expected 32 bytes, decoded {}", raw.len()))
        })?;
        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn base58_round_trip() {
        let addr = Address::new([42u8; 32]);
        let Ok(parsed) = addr.to_string().parse::<Address>() else {
            panic!("expected Ok");
        };
        assert_eq!(parsed, addr);
    }

    #[test]
    fn zero_renders_as_ones() {
        // base58 maps each leading zero byte to '1'
        assert_eq!(Address::zero().to_string(), "1".repeat(32));
        assert!(Address::zero().is_zero());
    }

    #[test]
    fn parse_rejects_short_input() {
        let short = bs58::encode([1u8; 16]).into_string();
        let Err(AmmError::InvalidAddress(msg)) = short.parse::<Address>() else {
            panic!("expected InvalidAddress");
        };
        assert!(msg.contains("16"));
    }

    #[test]
    fn parse_rejects_non_base58() {
        assert!("0OIl".parse::<Address>().is_err());
    }

    #[test]
    fn label_is_zero_padded() {
        let addr = Address::from_label(b"abc");
        assert_eq!(&addr.as_bytes()[..3], b"abc");
        assert!(addr.as_bytes()[3..].iter().all(|b| *b == 0));
    }

    #[test]
    fn long_label_is_truncated() {
        let addr = Address::from_label(&[9u8; 40]);
        assert_eq!(addr, Address::new([9u8; 32]));
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Address::new([0u8; 32]) < Address::new([1u8; 32]));
    }

    #[test]
    fn debug_contains_base58() {
        let addr = Address::new([3u8; 32]);
        assert_eq!(format!("{addr:?}"), format!("Address({addr})"));
    }
}
