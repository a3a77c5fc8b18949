//! Scheme Parameters
//!
//! Global constants shared by the Manx1 and Manx2 engines. All length
//! parameters throughout the crate are expressed in **bits**; the constants
//! here fix the block width, the authenticity level, and the per-scheme
//! associated-data bounds.

// =============================================================================
// BLOCK GEOMETRY
// =============================================================================

/// Width of the underlying block cipher in bytes.
pub const BLOCKBYTES: usize = 16;

/// Width of the underlying block cipher in bits.
pub const BLOCKBITS: usize = BLOCKBYTES * 8;

/// Key length of the underlying block cipher in bytes.
pub const KEYBYTES: usize = 16;

/// Authenticity security level τ in bits (half the block width).
pub const TAU: usize = BLOCKBITS / 2;

// =============================================================================
// MANX1 CONFIGURATION
// =============================================================================

/// Maximal associated-data length (in bits) accepted by Manx1.
pub const MANX1_ALPHAMAX: usize = 64;

/// Whether Manx1 one-zero pads the associated data to support variable
/// lengths. When disabled, callers must always pass exactly
/// [`MANX1_ALPHAMAX`] bits of associated data.
pub const MANX1_VARIABLE_ADLEN: bool = true;

// =============================================================================
// MANX2 CONFIGURATION
// =============================================================================

/// Maximal associated-data length (in bits) accepted by Manx2.
pub const MANX2_ALPHAMAX: usize = 16;

/// Whether Manx2 one-zero pads the associated data to support variable
/// lengths.
pub const MANX2_VARIABLE_ADLEN: bool = true;

/// Length α* (in bits) of the padded associated data in Manx2 input blocks.
pub const MANX2_ALPHASTAR: usize = if MANX2_VARIABLE_ADLEN {
    MANX2_ALPHAMAX + 1
} else {
    MANX2_ALPHAMAX
};
