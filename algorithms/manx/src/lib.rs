//! # Manx
//!
//! Authenticated encryption for very short messages — a single block or
//! less — with the minimum possible number of block-cipher calls. Two
//! schemes are provided over any pluggable 128-bit block cipher:
//!
//! * **Manx1**: always one block of ciphertext, two cipher calls.
//! * **Manx2**: one or two blocks depending on the message length, one or
//!   two cipher calls, with a decryption mode for two-block ciphertexts
//!   that does not need the nonce at all.
//!
//! Nonce, message, and associated-data lengths are all counted in **bits**,
//! so the schemes waste nothing on byte alignment — the natural fit for
//! packet formats on constrained radios where every transmitted bit and
//! every cipher invocation costs energy.
//!
//! # Usage
//! ```rust
//! use manx::{Aes128, Manx2, BLOCKBYTES};
//!
//! let key = [0x42u8; 16];
//! let nonce = [0x13u8; 8];
//! let aead = Manx2::<Aes128>::new(&key);
//!
//! // seal a 16-bit message under a 64-bit nonce, no associated data
//! let mut ctext = [0u8; 2 * BLOCKBYTES];
//! let clen = aead.encrypt(&nonce, 64, b"hi", 16, &[], 0, &mut ctext)?;
//! assert_eq!(clen, 128);
//!
//! // open it again
//! let mut ptext = [0u8; BLOCKBYTES];
//! let plen = aead.decrypt(&nonce, 64, &ctext, clen, &[], 0, &mut ptext)?;
//! assert_eq!(plen, 16);
//! assert_eq!(&ptext[..2], b"hi");
//! # Ok::<(), manx::Error>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod bits;
pub mod cipher;
pub mod gf128;
mod manx1;
mod manx2;
mod params;
mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "aes128")]
pub use cipher::Aes128;
pub use cipher::{BlockCipher, BlockCipherInverse, ChaskeyEm12};
pub use manx1::Manx1;
pub use manx2::Manx2;
pub use params::{
    BLOCKBITS, BLOCKBYTES, KEYBYTES, MANX1_ALPHAMAX, MANX1_VARIABLE_ADLEN, MANX2_ALPHAMAX,
    MANX2_ALPHASTAR, MANX2_VARIABLE_ADLEN, TAU,
};
pub use types::Error;

/// The tiny/short message threshold `r` of Manx2 for a nonce of `nlen`
/// bits: messages of at most `r` bits produce a single-block ciphertext,
/// longer ones two blocks. Saturates at zero for nonces the scheme would
/// reject anyway.
#[must_use]
pub const fn manx2_threshold(nlen: usize) -> usize {
    BLOCKBITS.saturating_sub(nlen + MANX2_ALPHASTAR + 2)
}
