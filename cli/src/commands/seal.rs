//! Seal Command
//!
//! Encrypt and authenticate a message, printing the ciphertext as hex.

use anyhow::Result;
use manx::{Aes128, BlockCipher, ChaskeyEm12, Manx1, Manx2, BLOCKBYTES, KEYBYTES};

use super::{hex_bits, Backend, CipherArgs, Scheme};

/// Run the seal subcommand.
pub fn seal_mode(args: &CipherArgs, msg_hex: &str, msg_bits: Option<usize>) -> Result<()> {
    let key = args.key_bytes()?;
    let (nonce, nlen) = hex_bits("nonce", &args.nonce, args.nonce_bits)?;
    let (ad, alen) = hex_bits("ad", &args.ad, args.ad_bits)?;
    let (msg, mlen) = hex_bits("msg", msg_hex, msg_bits)?;

    let input = SealInput {
        key: &key,
        nonce: &nonce,
        nlen,
        msg: &msg,
        mlen,
        ad: &ad,
        alen,
    };
    let (ctext, clen) = match args.backend {
        Backend::Aes128 => seal_with::<Aes128>(args.scheme, &input)?,
        Backend::Chaskey12 => seal_with::<ChaskeyEm12>(args.scheme, &input)?,
    };

    println!("{}", hex::encode(&ctext[..clen / 8]));
    eprintln!("sealed: {clen} bits");
    Ok(())
}

struct SealInput<'a> {
    key: &'a [u8; KEYBYTES],
    nonce: &'a [u8],
    nlen: usize,
    msg: &'a [u8],
    mlen: usize,
    ad: &'a [u8],
    alen: usize,
}

fn seal_with<C: BlockCipher>(scheme: Scheme, input: &SealInput<'_>) -> Result<([u8; 2 * BLOCKBYTES], usize)> {
    let mut out = [0u8; 2 * BLOCKBYTES];
    let clen = match scheme {
        Scheme::Manx1 => {
            let mut block = [0u8; BLOCKBYTES];
            let clen = Manx1::<C>::new(input.key).encrypt(
                input.nonce,
                input.nlen,
                input.msg,
                input.mlen,
                input.ad,
                input.alen,
                &mut block,
            )?;
            out[..BLOCKBYTES].copy_from_slice(&block);
            clen
        }
        Scheme::Manx2 => Manx2::<C>::new(input.key).encrypt(
            input.nonce,
            input.nlen,
            input.msg,
            input.mlen,
            input.ad,
            input.alen,
            &mut out,
        )?,
    };
    Ok((out, clen))
}
