//! Manx Basic Example
//!
//! Seal a short message with Manx1, then open it again.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use manx::{Aes128, Manx1, BLOCKBYTES};

fn main() {
    let key = [0x42u8; 16];
    let nonce = *b"unique nonce"; // 96 bits
    let message = b"Hello!"; // 48 bits

    let aead = Manx1::<Aes128>::new(&key);

    let mut ctext = [0u8; BLOCKBYTES];
    let clen = aead
        .encrypt(&nonce, 96, message, 48, &[], 0, &mut ctext)
        .unwrap();
    println!("Sealed {} bits: {}", clen, hex::encode(ctext));

    let mut ptext = [0u8; BLOCKBYTES];
    let plen = aead
        .decrypt(&nonce, 96, &ctext, clen, &[], 0, &mut ptext)
        .unwrap();
    println!(
        "Opened {} bits: {:?}",
        plen,
        String::from_utf8_lossy(&ptext[..plen / 8])
    );
}
