//! Block-Cipher Plug-In Interface
//!
//! The Manx engines treat the underlying 128-bit block cipher as an opaque
//! capability: key expansion happens when a backend is constructed, and the
//! engines only ever ask for single-block encryption (and, for decryption
//! paths, single-block inversion). Backends own whatever round-key material
//! their construction produces and wipe it on drop.

#[cfg(feature = "aes128")]
mod aes128;
mod chaskey;

#[cfg(feature = "aes128")]
pub use aes128::Aes128;
pub use chaskey::ChaskeyEm12;

use crate::params::{BLOCKBYTES, KEYBYTES};

// =============================================================================
// TRAITS
// =============================================================================

/// A 128-bit block cipher under a 128-bit key.
///
/// [`BlockCipher::new`] is the key-expansion step. Backends with an empty
/// key schedule (Even-Mansour constructions) simply retain the raw key,
/// which is the "key expansion may be absent" case of the plug-in
/// contract — no sentinel values are involved.
pub trait BlockCipher {
    /// Expand `key` into whatever per-instance state the backend needs.
    fn new(key: &[u8; KEYBYTES]) -> Self;

    /// Encrypt one block in place.
    fn encrypt_block(&self, block: &mut [u8; BLOCKBYTES]);
}

/// A [`BlockCipher`] whose inverse is also available.
///
/// Only the decryption operations require this; encryption-only callers
/// can use backends that never implement it.
pub trait BlockCipherInverse: BlockCipher {
    /// Decrypt one block in place.
    fn decrypt_block(&self, block: &mut [u8; BLOCKBYTES]);
}
