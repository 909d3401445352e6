// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use redoubt_hmac::{HashAlgo, Hmac};

fn benchmark_hmac(c: &mut Criterion) {
    for algo in [HashAlgo::Sha256, HashAlgo::Sha512, HashAlgo::Sha3_256] {
        let mut group = c.benchmark_group(format!("hmac_{algo:?}"));

        for msg_len in [64usize, 1024, 16384].iter() {
            group.throughput(Throughput::Bytes(*msg_len as u64));
            group.bench_with_input(format!("{msg_len} byte msg"), msg_len, |b, &msg_len| {
                let key = [0x42u8; 32];
                let msg = vec![0x24u8; msg_len];
                let mut tag = vec![0u8; algo.digest_size()];

                let mut hmac = Hmac::new();
                hmac.set_key(algo, &key).expect("set_key failed");

                b.iter(|| {
                    hmac.update(black_box(&msg)).expect("update failed");
                    hmac.finalize_into(black_box(&mut tag)).expect("finalize failed");
                });
            });
        }
        group.finish();
    }
}

criterion_group!(benches, benchmark_hmac);
criterion_main!(benches);
