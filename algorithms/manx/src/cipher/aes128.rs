//! AES-128 Backend
//!
//! Thin adapter over the RustCrypto `aes` crate, which picks hardware
//! (AES-NI, ARMv8 crypto extensions) or fixsliced software rounds on its
//! own. The expanded key schedule lives inside `aes::Aes128` and is wiped
//! on drop via that crate's `zeroize` support.

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};

use super::{BlockCipher, BlockCipherInverse};
use crate::params::{BLOCKBYTES, KEYBYTES};

/// AES-128 with a precomputed round-key schedule.
#[derive(Clone)]
pub struct Aes128 {
    inner: aes::Aes128,
}

impl BlockCipher for Aes128 {
    fn new(key: &[u8; KEYBYTES]) -> Self {
        Self {
            inner: aes::Aes128::new(aes::cipher::Key::<aes::Aes128>::from_slice(key)),
        }
    }

    fn encrypt_block(&self, block: &mut [u8; BLOCKBYTES]) {
        self.inner.encrypt_block(aes::Block::from_mut_slice(block));
    }
}

impl BlockCipherInverse for Aes128 {
    fn decrypt_block(&self, block: &mut [u8; BLOCKBYTES]) {
        self.inner.decrypt_block(aes::Block::from_mut_slice(block));
    }
}
