//! Manx1 Engine
//!
//! Single-block AEAD: every ciphertext is exactly one block, produced with
//! two cipher calls. Nonce, associated data, and message are packed bit by
//! bit into a two-block value `V = V[1] ‖ V[2]`; the first block is
//! encrypted and doubled in GF(2^128) to whiten the second, whose
//! encryption (whitened again) is the ciphertext. Authenticity comes from
//! re-deriving the nonce/AD remainder of `V[2]` during decryption and
//! comparing it, in constant time, against the recovered block.

#![allow(clippy::similar_names)]

use zeroize::Zeroizing;

use crate::bits::{self, BitCursor};
use crate::cipher::{BlockCipher, BlockCipherInverse};
use crate::gf128;
use crate::params::{BLOCKBITS, BLOCKBYTES, KEYBYTES, MANX1_ALPHAMAX, MANX1_VARIABLE_ADLEN, TAU};
use crate::types::Error;

// =============================================================================
// ENGINE
// =============================================================================

/// The Manx1 AEAD scheme over a pluggable block cipher.
///
/// Constructing the engine runs the backend's key expansion once; the same
/// value can then seal and open any number of messages. Dropping it wipes
/// the expanded key material.
pub struct Manx1<C: BlockCipher> {
    cipher: C,
}

impl<C: BlockCipher> Manx1<C> {
    /// Expand `key` and build an engine instance.
    #[must_use]
    pub fn new(key: &[u8; KEYBYTES]) -> Self {
        Self {
            cipher: C::new(key),
        }
    }

    /// Length `s` of the padded associated data for a given nonce length.
    fn padded_adlen(nlen: usize) -> usize {
        (BLOCKBITS - nlen + TAU).max(MANX1_ALPHAMAX)
    }

    /// Write the nonce/AD encoding of `V` and return the cursor where the
    /// message begins.
    fn encode_nonce_ad(
        v: &mut [u8],
        nonce: &[u8],
        nlen: usize,
        ad: &[u8],
        alen: usize,
        s: usize,
    ) -> BitCursor {
        let mut cur = BitCursor::new();
        cur = bits::concat_bits(v, cur, nonce, nlen);
        cur = bits::concat_bits(v, cur, ad, alen);
        if MANX1_VARIABLE_ADLEN {
            // one-zero padding turns A into the fixed-length Ā
            bits::set_bit(v, cur.pos());
            cur = cur.advance(s - alen);
        }
        cur
    }

    /// Encrypt `mlen` bits of `msg` under `nlen` bits of `nonce`,
    /// authenticating `alen` bits of `ad`. Writes one block of ciphertext
    /// into `ctext` and returns its bit length (always [`BLOCKBITS`]).
    ///
    /// # Errors
    ///
    /// Rejects messages of `BLOCKBITS − TAU` bits or more, associated data
    /// beyond [`MANX1_ALPHAMAX`] bits or leaving no room for its padding,
    /// nonces longer than a block, and messages that would overlap the
    /// encoded nonce/AD region. Nothing is written to `ctext` beyond zeros
    /// on rejection.
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
        ctext: &mut [u8; BLOCKBYTES],
    ) -> Result<usize, Error> {
        ctext.fill(0);
        if nlen > BLOCKBITS {
            return Err(Error::NonceTooLong);
        }
        if mlen >= BLOCKBITS - TAU {
            return Err(Error::MessageTooLong);
        }
        let s = Self::padded_adlen(nlen);
        if alen > MANX1_ALPHAMAX || (MANX1_VARIABLE_ADLEN && alen >= s) {
            return Err(Error::AdTooLong);
        }
        let v2len = s - (BLOCKBITS - nlen);
        if mlen >= BLOCKBITS - v2len {
            return Err(Error::MessageOverflow);
        }

        // V <- N || Ā || pad(M)
        let mut v = Zeroizing::new([0u8; 2 * BLOCKBYTES]);
        let cur = Self::encode_nonce_ad(&mut v[..], nonce, nlen, ad, alen, s);
        let cur = bits::concat_bits(&mut v[..], cur, msg, mlen);
        bits::set_bit(&mut v[..], cur.pos());

        // V[1] <- 2 E_K(V[1])
        let mut v1 = Zeroizing::new([0u8; BLOCKBYTES]);
        v1.copy_from_slice(&v[..BLOCKBYTES]);
        self.cipher.encrypt_block(&mut v1);
        gf128::double(&mut v1);

        // C <- E_K(V[2] ^ V[1]) ^ V[1]
        let mut v2 = Zeroizing::new([0u8; BLOCKBYTES]);
        v2.copy_from_slice(&v[BLOCKBYTES..]);
        bits::xor_bytes(&mut v2[..], &v1[..]);
        self.cipher.encrypt_block(&mut v2);
        ctext.copy_from_slice(&v2[..]);
        bits::xor_bytes(ctext, &v1[..]);

        Ok(BLOCKBITS)
    }

    /// Verify and decrypt `clen` bits of `ctext`. On success the plaintext
    /// is written to the front of `ptext` and its bit length returned.
    ///
    /// # Errors
    ///
    /// Rejects ciphertexts that are not exactly one block, out-of-range
    /// nonce or associated-data lengths, and any ciphertext whose recovered
    /// structure does not match `nonce` and `ad` ([`Error::NotAuthentic`]).
    /// `ptext` is left zeroed on rejection.
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
        if nlen > BLOCKBITS {
            return Err(Error::NonceTooLong);
        }
        if clen != BLOCKBITS {
            return Err(Error::CiphertextLength);
        }
        let s = Self::padded_adlen(nlen);
        if alen > MANX1_ALPHAMAX || (MANX1_VARIABLE_ADLEN && alen >= s) {
            return Err(Error::AdTooLong);
        }
        let v2len = s - (BLOCKBITS - nlen);

        // reference encoding of the nonce/AD remainder in V[2]
        let mut v = Zeroizing::new([0u8; 2 * BLOCKBYTES]);
        Self::encode_nonce_ad(&mut v[..], nonce, nlen, ad, alen, s);

        // S <- 2 E_K(V[1])
        let mut s_blk = Zeroizing::new([0u8; BLOCKBYTES]);
        s_blk.copy_from_slice(&v[..BLOCKBYTES]);
        self.cipher.encrypt_block(&mut s_blk);
        gf128::double(&mut s_blk);

        // v2~ <- E_K^{-1}(S ^ C) ^ S
        let mut v2_tilde = Zeroizing::new([0u8; BLOCKBYTES]);
        for (dst, (lhs, rhs)) in v2_tilde.iter_mut().zip(s_blk.iter().zip(ctext.iter())) {
            *dst = lhs ^ rhs;
        }
        self.cipher.decrypt_block(&mut v2_tilde);
        bits::xor_bytes(&mut v2_tilde[..], &s_blk[..]);

        // the first v2len bits must re-derive; the comparison covers the
        // whole range whether or not an early bit differs
        if !bool::from(bits::sec_memcmp_bits(&v[BLOCKBYTES..], &v2_tilde[..], v2len)) {
            return Err(Error::NotAuthentic);
        }

        let plen = bits::depad_10(&mut v2_tilde).saturating_sub(v2len);
        bits::lshift(ptext, &v2_tilde[v2len / 8..], plen, v2len % 8);
        Ok(plen)
    }
}
