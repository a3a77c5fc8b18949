//! Generator for Manx golden vectors
//!
//! Runs the canonical AES-128 seed calls and prints their exact
//! ciphertexts as JSON, to be pinned and diffed against future versions.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use manx::{Aes128, Manx1, Manx2, BLOCKBYTES};
use serde_json::json;

const KEY: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
    0x3c,
];
const NONCE: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
    0x0f,
];
const MSG: [u8; 16] = [
    0x7f, 0x43, 0xf6, 0xaf, 0x88, 0x5a, 0x30, 0x8d, 0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37, 0x07,
    0x34,
];

fn main() {
    let manx1 = Manx1::<Aes128>::new(&KEY);
    let manx2 = Manx2::<Aes128>::new(&KEY);
    let mut vectors = Vec::new();

    // Manx1, 96-bit nonce, 30-bit message, 64-bit AD
    let mut ctext = [0u8; BLOCKBYTES];
    let clen = manx1
        .encrypt(&NONCE, 96, &MSG, 30, &NONCE, 64, &mut ctext)
        .unwrap();
    vectors.push(json!({
        "name": "manx1_n96_m30_a64",
        "scheme": "manx1",
        "nlen": 96, "mlen": 30, "alen": 64,
        "clen": clen,
        "ctext": hex::encode(ctext),
    }));

    // Manx1, full-block nonce, 63-bit message, no AD
    let clen = manx1
        .encrypt(&NONCE, 128, &MSG, 63, &[], 0, &mut ctext)
        .unwrap();
    vectors.push(json!({
        "name": "manx1_n128_m63_a0",
        "scheme": "manx1",
        "nlen": 128, "mlen": 63, "alen": 0,
        "clen": clen,
        "ctext": hex::encode(ctext),
    }));

    // Manx2, 64-bit nonce, 96-bit message, no AD (two-block path)
    let mut ctext2 = [0u8; 2 * BLOCKBYTES];
    let clen = manx2
        .encrypt(&NONCE, 64, &MSG, 96, &[], 0, &mut ctext2)
        .unwrap();
    vectors.push(json!({
        "name": "manx2_n64_m96_a0",
        "scheme": "manx2",
        "nlen": 64, "mlen": 96, "alen": 0,
        "clen": clen,
        "ctext": hex::encode(ctext2),
    }));

    let out = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&out).unwrap());
}
