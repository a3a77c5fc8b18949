//! Open Command
//!
//! Verify and decrypt a ciphertext, printing the recovered message as hex
//! together with its exact bit length.

use anyhow::{bail, Result};
use manx::{
    Aes128, BlockCipher, BlockCipherInverse, ChaskeyEm12, Manx1, Manx2, BLOCKBITS, BLOCKBYTES,
    KEYBYTES,
};

use super::{hex_bits, Backend, CipherArgs, Scheme};

/// Run the open subcommand.
pub fn open_mode(args: &CipherArgs, ctext_hex: &str) -> Result<()> {
    let key = args.key_bytes()?;
    let (nonce, nlen) = hex_bits("nonce", &args.nonce, args.nonce_bits)?;
    let (ad, alen) = hex_bits("ad", &args.ad, args.ad_bits)?;
    let (ctext, clen) = hex_bits("ctext", ctext_hex, None)?;
    if clen != BLOCKBITS && clen != 2 * BLOCKBITS {
        bail!("ciphertext must be 16 or 32 bytes of hex");
    }

    let input = OpenInput {
        key: &key,
        nonce: &nonce,
        nlen,
        ctext: &ctext,
        clen,
        ad: &ad,
        alen,
    };
    let (ptext, plen) = match args.backend {
        Backend::Aes128 => open_with::<Aes128>(args.scheme, &input)?,
        Backend::Chaskey12 => open_with::<ChaskeyEm12>(args.scheme, &input)?,
    };

    println!("{}", hex::encode(&ptext[..plen.div_ceil(8)]));
    eprintln!("opened: {plen} bits");
    Ok(())
}

struct OpenInput<'a> {
    key: &'a [u8; KEYBYTES],
    nonce: &'a [u8],
    nlen: usize,
    ctext: &'a [u8],
    clen: usize,
    ad: &'a [u8],
    alen: usize,
}

fn open_with<C: BlockCipher + BlockCipherInverse>(
    scheme: Scheme,
    input: &OpenInput<'_>,
) -> Result<([u8; BLOCKBYTES], usize)> {
    let mut out = [0u8; BLOCKBYTES];
    let plen = match scheme {
        Scheme::Manx1 => Manx1::<C>::new(input.key).decrypt(
            input.nonce,
            input.nlen,
            input.ctext,
            input.clen,
            input.ad,
            input.alen,
            &mut out,
        )?,
        Scheme::Manx2 => Manx2::<C>::new(input.key).decrypt(
            input.nonce,
            input.nlen,
            input.ctext,
            input.clen,
            input.ad,
            input.alen,
            &mut out,
        )?,
    };
    Ok((out, plen))
}
