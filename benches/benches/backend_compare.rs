//! Backend Comparison
//!
//! AES-128 (expanded key schedule, hardware where available) against
//! Chaskey-EM-12 (ARX, no key schedule) on the same AEAD workloads.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use manx::{Aes128, BlockCipher, BlockCipherInverse, ChaskeyEm12, Manx2, BLOCKBYTES};
use rand::prelude::*;
use std::hint::black_box;

fn bench_backend<C: BlockCipher + BlockCipherInverse>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("Backend-{name}"));
    let mut rng = rand::thread_rng();

    let mut key = [0u8; 16];
    rng.fill(&mut key[..]);
    let mut nonce = [0u8; 8];
    rng.fill(&mut nonce[..]);
    let mut msg = [0u8; 16];
    rng.fill(&mut msg[..]);

    let aead = Manx2::<C>::new(&key);
    for (mlen, label) in [(32usize, "tiny"), (96, "short")] {
        group.bench_function(format!("seal-{label}"), |b| {
            let mut ctext = [0u8; 2 * BLOCKBYTES];
            b.iter(|| {
                aead.encrypt(black_box(&nonce), 64, black_box(&msg), mlen, &[], 0, &mut ctext)
                    .unwrap()
            });
        });

        let mut ctext = [0u8; 2 * BLOCKBYTES];
        let clen = aead.encrypt(&nonce, 64, &msg, mlen, &[], 0, &mut ctext).unwrap();
        group.bench_function(format!("open-{label}"), |b| {
            let mut ptext = [0u8; BLOCKBYTES];
            b.iter(|| {
                aead.decrypt(black_box(&nonce), 64, black_box(&ctext), clen, &[], 0, &mut ptext)
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn bench_backends(c: &mut Criterion) {
    bench_backend::<Aes128>(c, "aes128");
    bench_backend::<ChaskeyEm12>(c, "chaskey12");
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
