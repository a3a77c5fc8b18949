//! Chaskey-EM-12 Backend
//!
//! Single-key Even-Mansour cipher over the 12-round Chaskey permutation:
//! `E_K(x) = π(x ⊕ K) ⊕ K`. There is no key schedule at all — the raw
//! 128-bit key is the entire per-instance state — which makes this the
//! cheapest backend on targets without AES hardware and the reference
//! example of a backend whose key-expansion step is absent.

use zeroize::Zeroize;

use super::{BlockCipher, BlockCipherInverse};
use crate::params::{BLOCKBYTES, KEYBYTES};

/// Number of permutation rounds.
const ROUNDS: usize = 12;

/// Chaskey-EM with 12 permutation rounds.
#[derive(Clone)]
pub struct ChaskeyEm12 {
    key: [u32; 4],
}

impl Drop for ChaskeyEm12 {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

// =============================================================================
// PERMUTATION
// =============================================================================

/// One forward round of the Chaskey permutation (ARX over four words).
fn round(v: &mut [u32; 4]) {
    v[0] = v[0].wrapping_add(v[1]);
    v[1] = v[1].rotate_left(5) ^ v[0];
    v[0] = v[0].rotate_left(16);
    v[2] = v[2].wrapping_add(v[3]);
    v[3] = v[3].rotate_left(8) ^ v[2];
    v[0] = v[0].wrapping_add(v[3]);
    v[3] = v[3].rotate_left(13) ^ v[0];
    v[2] = v[2].wrapping_add(v[1]);
    v[1] = v[1].rotate_left(7) ^ v[2];
    v[2] = v[2].rotate_left(16);
}

/// One inverse round, undoing [`round`] operation by operation.
fn unround(v: &mut [u32; 4]) {
    v[2] = v[2].rotate_right(16);
    v[1] = (v[1] ^ v[2]).rotate_right(7);
    v[2] = v[2].wrapping_sub(v[1]);
    v[3] = (v[3] ^ v[0]).rotate_right(13);
    v[0] = v[0].wrapping_sub(v[3]);
    v[3] = (v[3] ^ v[2]).rotate_right(8);
    v[2] = v[2].wrapping_sub(v[3]);
    v[0] = v[0].rotate_right(16);
    v[1] = (v[1] ^ v[0]).rotate_right(5);
    v[0] = v[0].wrapping_sub(v[1]);
}

// =============================================================================
// STATE I/O
// =============================================================================

fn load(block: &[u8; BLOCKBYTES]) -> [u32; 4] {
    let mut v = [0u32; 4];
    for (word, chunk) in v.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    v
}

fn store(block: &mut [u8; BLOCKBYTES], v: &[u32; 4]) {
    for (chunk, word) in block.chunks_exact_mut(4).zip(v.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}

// =============================================================================
// CIPHER IMPLEMENTATION
// =============================================================================

impl BlockCipher for ChaskeyEm12 {
    fn new(key: &[u8; KEYBYTES]) -> Self {
        Self { key: load(key) }
    }

    fn encrypt_block(&self, block: &mut [u8; BLOCKBYTES]) {
        let mut v = load(block);
        for (word, k) in v.iter_mut().zip(&self.key) {
            *word ^= k;
        }
        for _ in 0..ROUNDS {
            round(&mut v);
        }
        for (word, k) in v.iter_mut().zip(&self.key) {
            *word ^= k;
        }
        store(block, &v);
        v.zeroize();
    }
}

impl BlockCipherInverse for ChaskeyEm12 {
    fn decrypt_block(&self, block: &mut [u8; BLOCKBYTES]) {
        let mut v = load(block);
        for (word, k) in v.iter_mut().zip(&self.key) {
            *word ^= k;
        }
        for _ in 0..ROUNDS {
            unround(&mut v);
        }
        for (word, k) in v.iter_mut().zip(&self.key) {
            *word ^= k;
        }
        store(block, &v);
        v.zeroize();
    }
}

// =============================================================================
// TESTS
// =============================================================================
