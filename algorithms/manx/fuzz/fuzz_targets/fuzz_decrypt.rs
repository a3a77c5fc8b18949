#![no_main]

use libfuzzer_sys::fuzz_target;
use manx::{Aes128, ChaskeyEm12, Manx1, Manx2, BLOCKBYTES, TAU};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    if data.len() < 50 {
        return;
    }
    let mut key = [0u8; 16];
    key.copy_from_slice(&data[0..16]);
    let mut nonce = [0u8; 16];
    nonce.copy_from_slice(&data[16..32]);
    let mut ad = [0u8; 8];
    ad.copy_from_slice(&data[32..40]);
    let ctext = &data[40..];

    // Arbitrary but admissible lengths derived from the input
    let nlen1 = usize::from(data[40]) % 129;
    let nlen2 = TAU + usize::from(data[41]) % 46; // 64..=109
    let alen1 = usize::from(data[42]) % 65;
    let alen2 = usize::from(data[43]) % 17;

    // =============================================================================
    // ARBITRARY CIPHERTEXTS MUST NEVER PANIC
    // =============================================================================

    let manx1 = Manx1::<Aes128>::new(&key);
    let manx2 = Manx2::<ChaskeyEm12>::new(&key);
    let mut ptext = [0u8; BLOCKBYTES];

    if ctext.len() >= BLOCKBYTES {
        let _ = manx1.decrypt(&nonce, nlen1, ctext, 128, &ad, alen1, &mut ptext);
        let _ = manx2.decrypt(&nonce, nlen2, ctext, 128, &ad, alen2, &mut ptext);
    }
    if ctext.len() >= 2 * BLOCKBYTES {
        let _ = manx2.decrypt(&nonce, nlen2, ctext, 256, &ad, alen2, &mut ptext);
    }
});
