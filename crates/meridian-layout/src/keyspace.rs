//! Mapping from logical row keys to physical storage keys.
//!
//! For raw-keyed tables the mapping is the identity. For hashed tables the
//! physical key is the big-endian 128-bit XXH3 digest of the row key
//! followed by the row key itself, so writes spread uniformly over the
//! digest space while distinct row keys stay distinct physically.

use bytes::{BufMut, BytesMut};
use xxhash_rust::xxh3::xxh3_128;

use meridian_common::constants::HASHED_PREFIX_SIZE;
use meridian_common::types::{PhysicalKey, RowKey};

use crate::descriptor::RowKeyEncoding;

/// Computes the 16-byte hash prefix for a row key.
#[must_use]
pub fn hashed_prefix(key: &RowKey) -> [u8; HASHED_PREFIX_SIZE] {
    xxh3_128(key.as_bytes()).to_be_bytes()
}

/// Maps a logical row key to its physical key under the given encoding.
#[must_use]
pub fn physical_key(encoding: RowKeyEncoding, key: &RowKey) -> PhysicalKey {
    match encoding {
        RowKeyEncoding::Raw => PhysicalKey::from_bytes(key.as_bytes()),
        RowKeyEncoding::Hashed => {
            let mut buf = BytesMut::with_capacity(HASHED_PREFIX_SIZE + key.len());
            buf.put_slice(&hashed_prefix(key));
            buf.put_slice(key.as_bytes());
            PhysicalKey::from_raw(buf.freeze())
        }
    }
}
