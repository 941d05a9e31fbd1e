//! Row-key and physical-key types for MeridianDB.
//!
//! A [`RowKey`] is the logical key a caller addresses a row with. A
//! [`PhysicalKey`] is the byte string the storage engine actually orders:
//! identical to the row key for raw-keyed tables, hash-prefixed for hashed
//! tables. Keeping the two as distinct types prevents logical keys from
//! leaking into places that require engine-level ordering.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// A logical row key supplied by the caller.
///
/// Row keys are variable-length byte sequences. They compare
/// lexicographically, which for raw-keyed tables is also the physical sort
/// order.
///
/// # Example
///
/// ```rust
/// use meridian_common::types::RowKey;
///
/// let key = RowKey::from_bytes(b"user:1234");
/// assert_eq!(key.len(), 9);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowKey(Bytes);

impl RowKey {
    /// Creates an empty row key.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self(Bytes::new())
    }

    /// Creates a row key from a byte slice.
    #[inline]
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }

    /// Creates a row key from owned bytes.
    #[inline]
    #[must_use]
    pub fn from_vec(vec: Vec<u8>) -> Self {
        Self(Bytes::from(vec))
    }

    /// Creates a row key from a `Bytes` instance.
    #[inline]
    #[must_use]
    pub const fn from_raw(bytes: Bytes) -> Self {
        Self(bytes)
    }

    /// Creates a row key from a string.
    #[inline]
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }

    /// Returns the length of the key in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the key is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the key as a byte slice.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the underlying `Bytes`.
    #[inline]
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl Deref for RowKey {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for RowKey {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Ord for RowKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for RowKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RowKey(")?;
        fmt_key_bytes(&self.0, f)?;
        write!(f, ")")
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_key_plain(&self.0, f)
    }
}

impl From<&[u8]> for RowKey {
    #[inline]
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for RowKey {
    #[inline]
    fn from(vec: Vec<u8>) -> Self {
        Self::from_vec(vec)
    }
}

impl From<&str> for RowKey {
    #[inline]
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for RowKey {
    #[inline]
    fn from(s: String) -> Self {
        Self::from_vec(s.into_bytes())
    }
}

impl From<Bytes> for RowKey {
    #[inline]
    fn from(bytes: Bytes) -> Self {
        Self::from_raw(bytes)
    }
}

/// A physical storage key.
///
/// Physical keys are what the storage engine sorts and what region
/// boundaries and scan ranges are expressed in. The empty physical key is
/// the absolute start of a table's key space.
///
/// # Example
///
/// ```rust
/// use meridian_common::types::PhysicalKey;
///
/// let key = PhysicalKey::from_bytes(b"m");
/// assert!(PhysicalKey::empty() < key);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhysicalKey(Bytes);

impl PhysicalKey {
    /// Creates the empty key, the smallest possible physical key.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self(Bytes::new())
    }

    /// Creates a physical key from a byte slice.
    #[inline]
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }

    /// Creates a physical key from owned bytes.
    #[inline]
    #[must_use]
    pub fn from_vec(vec: Vec<u8>) -> Self {
        Self(Bytes::from(vec))
    }

    /// Creates a physical key from a `Bytes` instance.
    #[inline]
    #[must_use]
    pub const fn from_raw(bytes: Bytes) -> Self {
        Self(bytes)
    }

    /// Creates a physical key from a string.
    #[inline]
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }

    /// Parses a physical key from a hex string such as `"40ff"`.
    ///
    /// Returns a description of the problem when the string is not an even
    /// number of hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        if hex.is_empty() {
            return Err("empty hex literal".to_string());
        }
        if hex.len() % 2 != 0 {
            return Err(format!("odd number of hex digits ({})", hex.len()));
        }
        let mut out = Vec::with_capacity(hex.len() / 2);
        for pair in hex.as_bytes().chunks_exact(2) {
            let hi = hex_digit(pair[0]);
            let lo = hex_digit(pair[1]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => out.push((hi << 4) | lo),
                _ => {
                    return Err(format!(
                        "invalid hex digit in '{}{}'",
                        pair[0] as char, pair[1] as char
                    ));
                }
            }
        }
        Ok(Self::from_vec(out))
    }

    /// Returns the length of the key in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if this is the empty key.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the key as a byte slice.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the underlying `Bytes`.
    #[inline]
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Checks if this key starts with the given prefix.
    #[inline]
    #[must_use]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.0.starts_with(prefix)
    }

    /// Returns the smallest key strictly greater than this key.
    #[must_use]
    pub fn successor(&self) -> Self {
        let mut bytes = self.0.to_vec();

        // Find the rightmost byte that is not 0xFF
        for i in (0..bytes.len()).rev() {
            if bytes[i] < 0xFF {
                bytes[i] += 1;
                bytes.truncate(i + 1);
                return Self::from_vec(bytes);
            }
        }

        // All bytes are 0xFF, append 0x00
        bytes.push(0x00);
        Self::from_vec(bytes)
    }

    /// Renders the key as lowercase hex.
    #[must_use]
    pub fn to_hex(&self) -> String {
        use std::fmt::Write;

        let mut out = String::with_capacity(self.0.len() * 2);
        for byte in &self.0 {
            // Writing to a String cannot fail
            let _ = write!(out, "{byte:02x}");
        }
        out
    }
}

impl Deref for PhysicalKey {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for PhysicalKey {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Ord for PhysicalKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for PhysicalKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for PhysicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhysicalKey(")?;
        fmt_key_bytes(&self.0, f)?;
        write!(f, ")")
    }
}

impl fmt::Display for PhysicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_key_plain(&self.0, f)
    }
}

impl From<&[u8]> for PhysicalKey {
    #[inline]
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for PhysicalKey {
    #[inline]
    fn from(vec: Vec<u8>) -> Self {
        Self::from_vec(vec)
    }
}

impl From<Bytes> for PhysicalKey {
    #[inline]
    fn from(bytes: Bytes) -> Self {
        Self::from_raw(bytes)
    }
}

/// Formats key bytes as a quoted UTF-8 string when printable, hex otherwise.
fn fmt_key_bytes(bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match std::str::from_utf8(bytes) {
        Ok(s) if s.chars().all(|c| !c.is_control() || c == ' ') => {
            write!(f, "{s:?}")
        }
        _ => {
            write!(f, "0x")?;
            for byte in &bytes[..bytes.len().min(32)] {
                write!(f, "{byte:02x}")?;
            }
            if bytes.len() > 32 {
                write!(f, "...")?;
            }
            Ok(())
        }
    }
}

/// Formats key bytes without quoting, for user-facing text.
fn fmt_key_plain(bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match std::str::from_utf8(bytes) {
        Ok(s) if s.chars().all(|c| !c.is_control() || c == ' ') => write!(f, "{s}"),
        _ => {
            for byte in &bytes[..bytes.len().min(32)] {
                write!(f, "{byte:02x}")?;
            }
            if bytes.len() > 32 {
                write!(f, "...")?;
            }
            Ok(())
        }
    }
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
