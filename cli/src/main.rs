//! Manx CLI
//!
//! Seal and open short messages with the Manx AEAD family from the command
//! line. All lengths are given in bits; hex inputs carry the bytes.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{open_mode, seal_mode, CipherArgs};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "manx")]
#[command(about = "AEAD for very short messages with minimal cipher calls", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt and authenticate a message
    Seal {
        #[command(flatten)]
        cipher: CipherArgs,

        /// Message as hex
        #[arg(long, default_value = "")]
        msg: String,

        /// Message length in bits (defaults to the full hex input)
        #[arg(long)]
        msg_bits: Option<usize>,
    },
    /// Verify and decrypt a ciphertext
    Open {
        #[command(flatten)]
        cipher: CipherArgs,

        /// Ciphertext as hex (16 or 32 bytes)
        #[arg(long)]
        ctext: String,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Seal {
            cipher,
            msg,
            msg_bits,
        } => seal_mode(&cipher, &msg, msg_bits),
        Commands::Open { cipher, ctext } => open_mode(&cipher, &ctext),
    }
}
