//! Security Properties
//!
//! Tamper rejection across every ciphertext bit, binding to the nonce and
//! associated data, the omittable-nonce mode of two-block ciphertexts, and
//! the full admissibility error surface with zeroed outputs.

#![cfg(feature = "aes128")]
#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use manx::{Aes128, BlockCipher, Error, Manx1, Manx2, BLOCKBYTES};

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

// =============================================================================
// TAMPER REJECTION
// =============================================================================

#[test]
fn manx1_rejects_every_single_bit_flip() {
    let aead = Manx1::<Aes128>::new(&KEY);
    let mut ctext = [0u8; BLOCKBYTES];
    let clen = aead
        .encrypt(&NONCE, 96, &MSG, 30, &NONCE, 64, &mut ctext)
        .unwrap();

    for bit in 0..clen {
        let mut forged = ctext;
        forged[bit / 8] ^= 0x80 >> (bit % 8);
        let mut ptext = [0xffu8; BLOCKBYTES];
        let err = aead
            .decrypt(&NONCE, 96, &forged, clen, &NONCE, 64, &mut ptext)
            .unwrap_err();
        assert_eq!(err, Error::NotAuthentic, "flip at bit {bit} not caught");
        assert_eq!(ptext, [0u8; BLOCKBYTES], "plaintext leaked at bit {bit}");
    }
}

#[test]
fn manx2_tiny_rejects_every_single_bit_flip() {
    let aead = Manx2::<Aes128>::new(&KEY);
    let mut ctext = [0u8; 2 * BLOCKBYTES];
    let clen = aead
        .encrypt(&NONCE, 64, &MSG, 20, &NONCE, 7, &mut ctext)
        .unwrap();
    assert_eq!(clen, 128);

    for bit in 0..clen {
        let mut forged = ctext;
        forged[bit / 8] ^= 0x80 >> (bit % 8);
        let mut ptext = [0xffu8; BLOCKBYTES];
        let res = aead.decrypt(&NONCE, 64, &forged, clen, &NONCE, 7, &mut ptext);
        assert!(res.is_err(), "flip at bit {bit} not caught");
        assert_eq!(ptext, [0u8; BLOCKBYTES], "plaintext leaked at bit {bit}");
    }
}

#[test]
fn manx2_short_rejects_every_single_bit_flip() {
    let aead = Manx2::<Aes128>::new(&KEY);
    let mut ctext = [0u8; 2 * BLOCKBYTES];
    let clen = aead
        .encrypt(&NONCE, 64, &MSG, 96, &NONCE, 7, &mut ctext)
        .unwrap();
    assert_eq!(clen, 256);

    for bit in 0..clen {
        let mut forged = ctext;
        forged[bit / 8] ^= 0x80 >> (bit % 8);
        let mut ptext = [0xffu8; BLOCKBYTES];
        let res = aead.decrypt(&NONCE, 64, &forged, clen, &NONCE, 7, &mut ptext);
        assert!(res.is_err(), "flip at bit {bit} not caught");
        assert_eq!(ptext, [0u8; BLOCKBYTES], "plaintext leaked at bit {bit}");
    }
}

// =============================================================================
// BINDING
// =============================================================================

#[test]
fn manx1_binds_nonce_and_ad() {
    let aead = Manx1::<Aes128>::new(&KEY);
    let mut ctext = [0u8; BLOCKBYTES];
    let clen = aead
        .encrypt(&NONCE, 96, &MSG, 30, &NONCE, 64, &mut ctext)
        .unwrap();

    let mut wrong_nonce = NONCE;
    wrong_nonce[11] ^= 0x04;
    let mut ptext = [0u8; BLOCKBYTES];
    assert!(aead
        .decrypt(&wrong_nonce, 96, &ctext, clen, &NONCE, 64, &mut ptext)
        .is_err());

    let mut wrong_ad = NONCE;
    wrong_ad[0] ^= 0x01;
    assert!(aead
        .decrypt(&NONCE, 96, &ctext, clen, &wrong_ad, 64, &mut ptext)
        .is_err());
}

#[test]
fn manx2_tiny_binds_nonce_and_ad() {
    let aead = Manx2::<Aes128>::new(&KEY);
    let mut ctext = [0u8; 2 * BLOCKBYTES];
    let clen = aead
        .encrypt(&NONCE, 64, &MSG, 20, &NONCE, 7, &mut ctext)
        .unwrap();

    let mut wrong_nonce = NONCE;
    wrong_nonce[3] ^= 0x10;
    let mut ptext = [0u8; BLOCKBYTES];
    assert!(aead
        .decrypt(&wrong_nonce, 64, &ctext, clen, &NONCE, 7, &mut ptext)
        .is_err());

    let mut wrong_ad = NONCE;
    wrong_ad[0] ^= 0x80;
    assert!(aead
        .decrypt(&NONCE, 64, &ctext, clen, &wrong_ad, 7, &mut ptext)
        .is_err());
}

#[test]
fn manx2_short_binds_ad() {
    let aead = Manx2::<Aes128>::new(&KEY);
    let mut ctext = [0u8; 2 * BLOCKBYTES];
    let clen = aead
        .encrypt(&NONCE, 64, &MSG, 96, &NONCE, 7, &mut ctext)
        .unwrap();

    let mut wrong_ad = NONCE;
    wrong_ad[0] ^= 0x02;
    let mut ptext = [0u8; BLOCKBYTES];
    assert!(aead
        .decrypt(&NONCE, 64, &ctext, clen, &wrong_ad, 7, &mut ptext)
        .is_err());
}

/// Two-block ciphertexts carry their own nonce: the nonce argument can be
/// anything as long as its declared length matches.
#[test]
fn manx2_short_ignores_nonce_argument() {
    let aead = Manx2::<Aes128>::new(&KEY);
    let mut ctext = [0u8; 2 * BLOCKBYTES];
    let clen = aead
        .encrypt(&NONCE, 64, &MSG, 96, &NONCE, 7, &mut ctext)
        .unwrap();
    assert_eq!(clen, 256);

    let garbage = [0xa5u8; 16];
    let mut ptext = [0u8; BLOCKBYTES];
    let plen = aead
        .decrypt(&garbage, 64, &ctext, clen, &NONCE, 7, &mut ptext)
        .unwrap();
    assert_eq!(plen, 96);
    assert_eq!(&ptext[..12], &MSG[..12]);
}

// =============================================================================
// DOMAIN SEPARATOR
// =============================================================================

/// Splicing a second block whose separator is not `01` behind an authentic
/// first block must be caught even though the nonce and AD check out.
#[test]
fn manx2_short_rejects_malformed_second_block() {
    let aead = Manx2::<Aes128>::new(&KEY);
    let mut ctext = [0u8; 2 * BLOCKBYTES];
    let clen = aead
        .encrypt(&NONCE, 64, &MSG, 96, &[], 0, &mut ctext)
        .unwrap();

    // N || 00 || 0…0 — right nonce, wrong separator
    let mut block = [0u8; BLOCKBYTES];
    block[..8].copy_from_slice(&NONCE[..8]);
    let cipher = Aes128::new(&KEY);
    cipher.encrypt_block(&mut block);
    ctext[BLOCKBYTES..].copy_from_slice(&block);

    let mut ptext = [0u8; BLOCKBYTES];
    let err = aead
        .decrypt(&NONCE, 64, &ctext, clen, &[], 0, &mut ptext)
        .unwrap_err();
    assert_eq!(err, Error::BadDomainSeparator);
    assert_eq!(ptext, [0u8; BLOCKBYTES]);
}

// =============================================================================
// ADMISSIBILITY
// =============================================================================

#[test]
fn manx1_admissibility_errors() {
    let aead = Manx1::<Aes128>::new(&KEY);
    let mut ctext = [0xaau8; BLOCKBYTES];

    assert_eq!(
        aead.encrypt(&NONCE, 96, &MSG, 64, &NONCE, 64, &mut ctext),
        Err(Error::MessageTooLong)
    );
    assert_eq!(ctext, [0u8; BLOCKBYTES]);

    assert_eq!(
        aead.encrypt(&NONCE, 96, &MSG, 30, &NONCE, 65, &mut ctext),
        Err(Error::AdTooLong)
    );

    // with a full-block nonce the AD terminator has no room at the maximum
    assert_eq!(
        aead.encrypt(&NONCE, 128, &MSG, 30, &NONCE, 64, &mut ctext),
        Err(Error::AdTooLong)
    );

    let mut ptext = [0u8; BLOCKBYTES];
    assert_eq!(
        aead.decrypt(&NONCE, 96, &ctext, 120, &NONCE, 64, &mut ptext),
        Err(Error::CiphertextLength)
    );
}

#[test]
fn manx2_admissibility_errors() {
    let aead = Manx2::<Aes128>::new(&KEY);
    let mut ctext = [0xaau8; 2 * BLOCKBYTES];

    assert_eq!(
        aead.encrypt(&NONCE, 63, &MSG, 8, &[], 0, &mut ctext),
        Err(Error::NonceTooShort)
    );
    assert_eq!(ctext, [0u8; 2 * BLOCKBYTES]);

    assert_eq!(
        aead.encrypt(&NONCE, 110, &MSG, 8, &[], 0, &mut ctext),
        Err(Error::NonceTooLong)
    );

    // nlen = 64 gives r = 45, so 107 message bits overflow both blocks
    assert_eq!(
        aead.encrypt(&NONCE, 64, &MSG, 107, &[], 0, &mut ctext),
        Err(Error::MessageTooLong)
    );

    assert_eq!(
        aead.encrypt(&NONCE, 64, &MSG, 8, &NONCE, 17, &mut ctext),
        Err(Error::AdTooLong)
    );

    let mut ptext = [0u8; BLOCKBYTES];
    assert_eq!(
        aead.decrypt(&NONCE, 64, &ctext, 192, &[], 0, &mut ptext),
        Err(Error::CiphertextLength)
    );
}
