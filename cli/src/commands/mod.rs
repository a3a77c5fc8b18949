//! CLI Commands
//!
//! All manx CLI commands organized as separate modules, plus the argument
//! block and parsing helpers they share.

mod open;
mod seal;

pub use open::open_mode;
pub use seal::seal_mode;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use manx::KEYBYTES;

// =============================================================================
// SHARED ARGUMENTS
// =============================================================================

/// Which AEAD scheme to run.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum Scheme {
    /// Manx1: always one ciphertext block, two cipher calls
    Manx1,
    /// Manx2: one or two blocks depending on message length
    Manx2,
}

/// Which block-cipher backend to plug in.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum Backend {
    /// AES-128 (hardware-accelerated where available)
    Aes128,
    /// Chaskey-EM with 12 rounds (no key schedule)
    Chaskey12,
}

/// Key, nonce, and associated-data arguments common to seal and open.
#[derive(Args)]
pub struct CipherArgs {
    /// AEAD scheme
    #[arg(long, value_enum, default_value_t = Scheme::Manx2)]
    pub scheme: Scheme,

    /// Block-cipher backend
    #[arg(long, value_enum, default_value_t = Backend::Aes128)]
    pub backend: Backend,

    /// 128-bit key as hex
    #[arg(long)]
    pub key: String,

    /// Nonce as hex
    #[arg(long)]
    pub nonce: String,

    /// Nonce length in bits (defaults to the full hex input)
    #[arg(long)]
    pub nonce_bits: Option<usize>,

    /// Associated data as hex
    #[arg(long, default_value = "")]
    pub ad: String,

    /// Associated-data length in bits (defaults to the full hex input)
    #[arg(long)]
    pub ad_bits: Option<usize>,
}

impl CipherArgs {
    /// Decode the key field into its fixed-size array.
    pub fn key_bytes(&self) -> Result<[u8; KEYBYTES]> {
        let bytes = hex::decode(&self.key).context("key is not valid hex")?;
        let Ok(key) = <[u8; KEYBYTES]>::try_from(bytes) else {
            bail!("key must be exactly {KEYBYTES} bytes of hex");
        };
        Ok(key)
    }
}

// =============================================================================
// HEX HELPERS
// =============================================================================

/// Decode a hex field together with its bit length, defaulting to every
/// bit of the decoded bytes.
pub fn hex_bits(label: &str, hex_str: &str, bits: Option<usize>) -> Result<(Vec<u8>, usize)> {
    let bytes = hex::decode(hex_str).with_context(|| format!("{label} is not valid hex"))?;
    let len = bits.unwrap_or(bytes.len() * 8);
    if len > bytes.len() * 8 {
        bail!(
            "{label} is {} bits of hex but {len} bits were requested",
            bytes.len() * 8
        );
    }
    Ok((bytes, len))
}
