//! Shared types used across the Manx library.

use core::fmt;
use std::error;

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Reasons an AEAD operation can be rejected.
///
/// Encryption rejections are parameter-admissibility failures and are the
/// caller's responsibility. Decryption rejections additionally cover
/// malformed ciphertext shapes and authentication failures; in every case
/// the output buffer is left zeroed, so no partial plaintext or ciphertext
/// is ever exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The message does not fit the scheme's single-block bound.
    MessageTooLong,
    /// The message collides with the encoded nonce/associated-data region.
    MessageOverflow,
    /// The associated data exceeds the scheme's α bound.
    AdTooLong,
    /// The nonce is shorter than the authenticity level requires.
    NonceTooShort,
    /// The nonce does not leave room for the rest of the input block.
    NonceTooLong,
    /// The ciphertext bit length is not one the scheme can produce.
    CiphertextLength,
    /// The recovered block structure does not match the nonce and
    /// associated data; the ciphertext is not authentic.
    NotAuthentic,
    /// The recovered second block does not carry the expected domain
    /// separator (Manx2 two-block ciphertexts only).
    BadDomainSeparator,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::MessageTooLong => "message too long for a single-block scheme",
            Self::MessageOverflow => "message overlaps the encoded nonce/AD region",
            Self::AdTooLong => "associated data exceeds the configured maximum",
            Self::NonceTooShort => "nonce shorter than the authenticity level",
            Self::NonceTooLong => "nonce leaves no room in the input block",
            Self::CiphertextLength => "ciphertext length is not valid for the scheme",
            Self::NotAuthentic => "ciphertext failed authentication",
            Self::BadDomainSeparator => "recovered block carries a malformed domain separator",
        };
        f.write_str(msg)
    }
}

impl error::Error for Error {}
