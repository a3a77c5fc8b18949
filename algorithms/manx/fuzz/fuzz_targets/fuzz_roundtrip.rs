#![no_main]

use libfuzzer_sys::fuzz_target;
use manx::{manx2_threshold, Aes128, Manx1, Manx2, BLOCKBITS, BLOCKBYTES, TAU};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    if data.len() < 52 {
        return;
    }
    let mut key = [0u8; 16];
    key.copy_from_slice(&data[0..16]);
    let mut nonce = [0u8; 16];
    nonce.copy_from_slice(&data[16..32]);
    let mut msg = [0u8; 16];
    msg.copy_from_slice(&data[32..48]);
    let mut ad = [0u8; 2];
    ad.copy_from_slice(&data[48..50]);

    // =============================================================================
    // MANX1: SEAL THEN OPEN
    // =============================================================================

    let nlen = usize::from(data[50]) % 129;
    let alen = usize::from(data[51]) % 65;
    let mlen = usize::from(data[50] ^ data[51]) % 64;
    let manx1 = Manx1::<Aes128>::new(&key);
    let mut ctext1 = [0u8; BLOCKBYTES];
    if let Ok(clen) = manx1.encrypt(&nonce, nlen, &msg, mlen, &nonce, alen, &mut ctext1) {
        let mut ptext = [0u8; BLOCKBYTES];
        let plen = manx1
            .decrypt(&nonce, nlen, &ctext1, clen, &nonce, alen, &mut ptext)
            .unwrap();
        assert_eq!(plen, mlen, "Manx1 length not recovered");
    }

    // =============================================================================
    // MANX2: SEAL THEN OPEN
    // =============================================================================

    let nlen = TAU + usize::from(data[50]) % 46; // 64..=109
    let alen = usize::from(data[51]) % 17;
    let r = manx2_threshold(nlen);
    let mlen = usize::from(u16::from_le_bytes([data[48], data[49]])) % (BLOCKBITS - nlen - 2 + r);
    let manx2 = Manx2::<Aes128>::new(&key);
    let mut ctext2 = [0u8; 2 * BLOCKBYTES];
    if let Ok(clen) = manx2.encrypt(&nonce, nlen, &msg, mlen, &ad, alen, &mut ctext2) {
        let mut ptext = [0u8; BLOCKBYTES];
        let plen = manx2
            .decrypt(&nonce, nlen, &ctext2, clen, &ad, alen, &mut ptext)
            .unwrap();
        assert_eq!(plen, mlen, "Manx2 length not recovered");
    }
});
