//! Manx Operation Latency
//!
//! Per-call latency of seal and open for both schemes over AES-128, across
//! the message sizes that select each internal path.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use manx::{Aes128, Manx1, Manx2, BLOCKBYTES};
use rand::prelude::*;
use std::hint::black_box;

// =============================================================================
// BENCHMARK 1: MANX1
// =============================================================================

/// One-block seal/open latency across message lengths.
fn bench_manx1(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Manx1");
    let mut rng = rand::thread_rng();

    let mut key = [0u8; 16];
    rng.fill(&mut key[..]);
    let mut nonce = [0u8; 12];
    rng.fill(&mut nonce[..]);
    let mut ad = [0u8; 8];
    rng.fill(&mut ad[..]);
    let mut msg = [0u8; 8];
    rng.fill(&mut msg[..]);

    let aead = Manx1::<Aes128>::new(&key);
    for mlen in [0usize, 30, 63] {
        group.bench_function(format!("seal-{mlen}bit"), |b| {
            let mut ctext = [0u8; BLOCKBYTES];
            b.iter(|| {
                aead.encrypt(
                    black_box(&nonce),
                    96,
                    black_box(&msg),
                    mlen,
                    &ad,
                    64,
                    &mut ctext,
                )
                .unwrap()
            });
        });

        let mut ctext = [0u8; BLOCKBYTES];
        let clen = aead.encrypt(&nonce, 96, &msg, mlen, &ad, 64, &mut ctext).unwrap();
        group.bench_function(format!("open-{mlen}bit"), |b| {
            let mut ptext = [0u8; BLOCKBYTES];
            b.iter(|| {
                aead.decrypt(
                    black_box(&nonce),
                    96,
                    black_box(&ctext),
                    clen,
                    &ad,
                    64,
                    &mut ptext,
                )
                .unwrap()
            });
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: MANX2
// =============================================================================

/// Tiny (one-block) vs short (two-block) path latency.
fn bench_manx2(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Manx2");
    let mut rng = rand::thread_rng();

    let mut key = [0u8; 16];
    rng.fill(&mut key[..]);
    let mut nonce = [0u8; 8];
    rng.fill(&mut nonce[..]);
    let mut msg = [0u8; 16];
    rng.fill(&mut msg[..]);

    let aead = Manx2::<Aes128>::new(&key);
    for (mlen, name) in [(16usize, "tiny-16bit"), (45, "tiny-45bit"), (96, "short-96bit")] {
        group.bench_function(format!("seal-{name}"), |b| {
            let mut ctext = [0u8; 2 * BLOCKBYTES];
            b.iter(|| {
                aead.encrypt(black_box(&nonce), 64, black_box(&msg), mlen, &[], 0, &mut ctext)
                    .unwrap()
            });
        });

        let mut ctext = [0u8; 2 * BLOCKBYTES];
        let clen = aead.encrypt(&nonce, 64, &msg, mlen, &[], 0, &mut ctext).unwrap();
        group.bench_function(format!("open-{name}"), |b| {
            let mut ptext = [0u8; BLOCKBYTES];
            b.iter(|| {
                aead.decrypt(black_box(&nonce), 64, black_box(&ctext), clen, &[], 0, &mut ptext)
                    .unwrap()
            });
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: KEY EXPANSION AMORTISATION
// =============================================================================

/// Cost of constructing the engine (key schedule) per call vs reusing it.
fn bench_key_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Key-Expansion");
    let mut rng = rand::thread_rng();

    let mut key = [0u8; 16];
    rng.fill(&mut key[..]);
    let mut nonce = [0u8; 8];
    rng.fill(&mut nonce[..]);
    let msg = [0x5au8; 4];

    group.bench_function("seal-fresh-engine", |b| {
        let mut ctext = [0u8; 2 * BLOCKBYTES];
        b.iter(|| {
            Manx2::<Aes128>::new(black_box(&key))
                .encrypt(&nonce, 64, &msg, 32, &[], 0, &mut ctext)
                .unwrap()
        });
    });

    let aead = Manx2::<Aes128>::new(&key);
    group.bench_function("seal-reused-engine", |b| {
        let mut ctext = [0u8; 2 * BLOCKBYTES];
        b.iter(|| {
            aead.encrypt(black_box(&nonce), 64, &msg, 32, &[], 0, &mut ctext)
                .unwrap()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_manx1, bench_manx2, bench_key_expansion);
criterion_main!(benches);
