//! Manx2 Engine
//!
//! One- or two-block AEAD selected by message length. With
//! `r = BLOCKBITS − (ν + α* + 2)`, messages of at most `r` bits fit a
//! single input block (the "tiny" path, one cipher call); longer messages
//! split across two blocks (the "short" path, two cipher calls). Two
//! domain-separator bits after the nonce keep the cases apart:
//!
//! | case        | separator |
//! |-------------|-----------|
//! | `mlen <  r` | `10`      |
//! | `mlen == r` | `11`      |
//! | `mlen >  r` | `00` / `01` (first / second block) |
//!
//! Two-block ciphertexts carry the nonce inside both blocks, so the
//! decryptor recovers it from the ciphertext itself and the nonce argument
//! is ignored — the "omittable nonce" mode.

#![allow(clippy::similar_names)]

use core::cmp::Ordering;

use zeroize::Zeroizing;

use crate::bits::{self, BitCursor};
use crate::cipher::{BlockCipher, BlockCipherInverse};
use crate::params::{
    BLOCKBITS, BLOCKBYTES, KEYBYTES, MANX2_ALPHAMAX, MANX2_ALPHASTAR, MANX2_VARIABLE_ADLEN, TAU,
};
use crate::types::Error;

// =============================================================================
// BLOCK ENCODING
// =============================================================================

/// Write the two domain-separator bits for a message of `mlen` bits.
fn write_domain(block: &mut [u8], cur: BitCursor, mlen: usize, r: usize) -> BitCursor {
    match mlen.cmp(&r) {
        Ordering::Less => {
            bits::set_bit(block, cur.pos());
            cur.advance(2)
        }
        Ordering::Equal => {
            bits::set_bit(block, cur.pos());
            bits::set_bit(block, cur.pos() + 1);
            cur.advance(2)
        }
        Ordering::Greater => cur.advance(2),
    }
}

/// Build the single input block `N ‖ d ‖ Ā ‖ pad_r(M)` of the tiny path.
///
/// When the message fills the block exactly (`mlen == r`) there is no room
/// for a padding bit and none is needed: the `11` separator already marks
/// the boundary.
fn encode_tiny(
    block: &mut [u8; BLOCKBYTES],
    nonce: &[u8],
    nlen: usize,
    ad: &[u8],
    alen: usize,
    msg: &[u8],
    mlen: usize,
) {
    let r = BLOCKBITS - (nlen + MANX2_ALPHASTAR + 2);
    block.fill(0);
    let mut cur = BitCursor::new();
    cur = bits::concat_bits(block, cur, nonce, nlen);
    cur = write_domain(block, cur, mlen, r);
    cur = bits::concat_bits(block, cur, ad, alen);
    if MANX2_VARIABLE_ADLEN {
        bits::set_bit(block, cur.pos());
        cur = cur.advance(MANX2_ALPHASTAR - alen);
    }
    cur = bits::concat_bits(block, cur, msg, mlen);
    if cur.pos() < BLOCKBITS {
        bits::set_bit(block, cur.pos());
    }
}

/// Build the two input blocks `N ‖ 00 ‖ Ā ‖ M[1]` and `N ‖ 01 ‖ pad(M[2])`
/// of the short path.
///
/// The message is written once; whatever spills past the first block is
/// `M[2]`, which is pulled out and re-encoded behind the nonce in the
/// second block.
fn encode_short(
    t: &mut [u8; 2 * BLOCKBYTES],
    nonce: &[u8],
    nlen: usize,
    ad: &[u8],
    alen: usize,
    msg: &[u8],
    mlen: usize,
) {
    let r = BLOCKBITS - (nlen + MANX2_ALPHASTAR + 2);
    t.fill(0);

    let mut cur = BitCursor::new();
    cur = bits::concat_bits(&mut t[..], cur, nonce, nlen);
    cur = cur.advance(2); // separator 00
    cur = bits::concat_bits(&mut t[..], cur, ad, alen);
    if MANX2_VARIABLE_ADLEN {
        bits::set_bit(&mut t[..], cur.pos());
        cur = cur.advance(MANX2_ALPHASTAR - alen);
    }
    bits::concat_bits(&mut t[..], cur, msg, mlen);

    // M[2] is the spill beyond the first block
    let m2len = mlen - r;
    let mut m2 = Zeroizing::new([0u8; BLOCKBYTES]);
    m2.copy_from_slice(&t[BLOCKBYTES..]);

    let second = &mut t[BLOCKBYTES..];
    second.fill(0);
    let mut cur = BitCursor::new();
    cur = bits::concat_bits(second, cur, nonce, nlen);
    cur = cur.advance(1);
    bits::set_bit(second, cur.pos());
    cur = cur.advance(1); // separator 01
    cur = bits::concat_bits(second, cur, &m2[..], m2len);
    bits::set_bit(second, cur.pos());
}

// =============================================================================
// ENGINE
// =============================================================================

/// The Manx2 AEAD scheme over a pluggable block cipher.
///
/// Constructing the engine runs the backend's key expansion once; the same
/// value can then seal and open any number of messages. Dropping it wipes
/// the expanded key material.
pub struct Manx2<C: BlockCipher> {
    cipher: C,
}

impl<C: BlockCipher> Manx2<C> {
    /// Expand `key` and build an engine instance.
    #[must_use]
    pub fn new(key: &[u8; KEYBYTES]) -> Self {
        Self {
            cipher: C::new(key),
        }
    }

    /// Validate the nonce length and return the tiny/short threshold `r`.
    const fn tiny_capacity(nlen: usize) -> Result<usize, Error> {
        if nlen < TAU {
            return Err(Error::NonceTooShort);
        }
        if nlen + MANX2_ALPHASTAR + 2 > BLOCKBITS {
            return Err(Error::NonceTooLong);
        }
        Ok(BLOCKBITS - (nlen + MANX2_ALPHASTAR + 2))
    }

    /// Encrypt `mlen` bits of `msg` under `nlen` bits of `nonce`,
    /// authenticating `alen` bits of `ad`. Writes one or two blocks of
    /// ciphertext into `ctext` and returns the ciphertext bit length:
    /// [`BLOCKBITS`] when `mlen ≤ r`, `2 · BLOCKBITS` otherwise.
    ///
    /// # Errors
    ///
    /// Rejects nonces shorter than [`TAU`] bits or too long to leave room
    /// for the header, messages beyond the two-block capacity, and
    /// associated data over [`MANX2_ALPHAMAX`] bits. Nothing is written to
    /// `ctext` beyond zeros on rejection.
    ///
    /// # Panics
    ///
    /// Panics if a buffer is shorter than its bit-length argument claims.
    #[allow(clippy::too_many_arguments)]
    pub fn encrypt(
        &self,
        nonce: &[u8],
        nlen: usize,
        msg: &[u8],
        mlen: usize,
        ad: &[u8],
        alen: usize,
        ctext: &mut [u8; 2 * BLOCKBYTES],
    ) -> Result<usize, Error> {
        ctext.fill(0);
        let r = Self::tiny_capacity(nlen)?;
        if mlen >= BLOCKBITS - nlen - 2 + r {
            return Err(Error::MessageTooLong);
        }
        if alen > MANX2_ALPHAMAX {
            return Err(Error::AdTooLong);
        }

        if mlen <= r {
            let mut t = Zeroizing::new([0u8; BLOCKBYTES]);
            encode_tiny(&mut t, nonce, nlen, ad, alen, msg, mlen);
            self.cipher.encrypt_block(&mut t);
            ctext[..BLOCKBYTES].copy_from_slice(&t[..]);
            Ok(BLOCKBITS)
        } else {
            let mut t = Zeroizing::new([0u8; 2 * BLOCKBYTES]);
            encode_short(&mut t, nonce, nlen, ad, alen, msg, mlen);
            let mut block = Zeroizing::new([0u8; BLOCKBYTES]);
            block.copy_from_slice(&t[..BLOCKBYTES]);
            self.cipher.encrypt_block(&mut block);
            ctext[..BLOCKBYTES].copy_from_slice(&block[..]);
            block.copy_from_slice(&t[BLOCKBYTES..]);
            self.cipher.encrypt_block(&mut block);
            ctext[BLOCKBYTES..].copy_from_slice(&block[..]);
            Ok(2 * BLOCKBITS)
        }
    }

    /// Verify and decrypt `clen` bits of `ctext`. On success the plaintext
    /// is written to the front of `ptext` and its bit length returned.
    ///
    /// For two-block ciphertexts the nonce bytes are ignored: the nonce is
    /// recovered from the ciphertext itself and cross-checked between the
    /// two blocks. Only `nlen` must match the value used at encryption.
    ///
    /// # Errors
    ///
    /// Rejects ciphertexts that are not exactly one or two blocks,
    /// out-of-range nonce or associated-data lengths, recovered blocks
    /// that do not re-derive the expected structure
    /// ([`Error::NotAuthentic`]), and second blocks without the `01`
    /// separator ([`Error::BadDomainSeparator`]). `ptext` is left zeroed
    /// on rejection.
    ///
    /// # Panics
    ///
    /// Panics if a buffer is shorter than its bit-length argument claims.
    #[allow(clippy::too_many_arguments)]
    pub fn decrypt(
        &self,
        nonce: &[u8],
        nlen: usize,
        ctext: &[u8],
        clen: usize,
        ad: &[u8],
        alen: usize,
        ptext: &mut [u8; BLOCKBYTES],
    ) -> Result<usize, Error>
    where
        C: BlockCipherInverse,
    {
        ptext.fill(0);
        let r = Self::tiny_capacity(nlen)?;
        if clen != BLOCKBITS && clen != 2 * BLOCKBITS {
            return Err(Error::CiphertextLength);
        }
        if alen > MANX2_ALPHAMAX {
            return Err(Error::AdTooLong);
        }
        let hdr = nlen + 2 + MANX2_ALPHASTAR;

        let mut s1 = Zeroizing::new([0u8; BLOCKBYTES]);
        s1.copy_from_slice(&ctext[..BLOCKBYTES]);
        self.cipher.decrypt_block(&mut s1);

        let mut expected = Zeroizing::new([0u8; BLOCKBYTES]);

        if clen == BLOCKBITS {
            // the second separator bit distinguishes a padded message from
            // one that fills the block; copy it over so the comparison is
            // neutral to it
            encode_tiny(&mut expected, nonce, nlen, ad, alen, &[], 0);
            let ds = bits::get_bit(&s1[..], nlen + 1);
            bits::assign_bit(&mut expected[..], nlen + 1, ds);

            if !bool::from(bits::sec_memcmp_bits(&s1[..], &expected[..], hdr)) {
                return Err(Error::NotAuthentic);
            }

            let padlen = if ds == 1 {
                BLOCKBITS
            } else {
                bits::depad_10(&mut s1)
            };
            let plen = padlen.saturating_sub(hdr);
            bits::lshift(ptext, &s1[hdr / 8..], plen, hdr % 8);
            Ok(plen)
        } else {
            let mut s2 = Zeroizing::new([0u8; BLOCKBYTES]);
            s2.copy_from_slice(&ctext[BLOCKBYTES..2 * BLOCKBYTES]);
            self.cipher.decrypt_block(&mut s2);

            // rebuild the expected first block from the nonce carried in
            // the second one; checking it against S[1] verifies the AD and
            // that both blocks agree on the nonce
            encode_tiny(&mut expected, &s2[..], nlen, ad, alen, &[], 0);
            bits::clear_bit(&mut expected[..], nlen);
            bits::clear_bit(&mut expected[..], nlen + 1);
            if !bool::from(bits::sec_memcmp_bits(&s1[..], &expected[..], hdr)) {
                return Err(Error::NotAuthentic);
            }
            if bits::get_bit(&s2[..], nlen) != 0 || bits::get_bit(&s2[..], nlen + 1) != 1 {
                return Err(Error::BadDomainSeparator);
            }

            // M <- M[1] || depad(M[2])
            bits::lshift(ptext, &s1[hdr / 8..], r, hdr % 8);
            let m2len = bits::depad_10(&mut s2).saturating_sub(nlen + 2);
            let mut m2 = Zeroizing::new([0u8; BLOCKBYTES]);
            bits::lshift(&mut m2[..], &s2[(nlen + 2) / 8..], m2len, (nlen + 2) % 8);
            bits::concat_bits(
                ptext,
                BitCursor {
                    oct: r / 8,
                    bit: r % 8,
                },
                &m2[..],
                m2len,
            );
            Ok(r + m2len)
        }
    }
}
