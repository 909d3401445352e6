// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC over the SHA-3 family
//!
//! The keyed construction is shared with the SHA-2 suite; these tests pin
//! the sponge-rate block sizes, which are the only SHA-3-specific inputs.

use hex_literal::hex;
use redoubt_digest::DigestState;

use super::mac;
use crate::{HashAlgo, Hmac};

const SHA3_ALGOS: [HashAlgo; 4] = [
    HashAlgo::Sha3_224,
    HashAlgo::Sha3_256,
    HashAlgo::Sha3_384,
    HashAlgo::Sha3_512,
];

#[test]
fn test_hmac_sha3_256_nist_sample() {
    // NIST HMAC_SHA3-256 sample, keylen < blocklen.
    let key = hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
    let msg = b"Sample message for keylen<blocklen";

    assert_eq!(
        mac(HashAlgo::Sha3_256, &key, msg),
        hex!("4fe8e202c4f058e8dddc23d8c34e467343e23555e24fc2f025d598f558f67205")
    );
}

#[test]
fn test_block_sized_key_is_not_prehashed() {
    // A key of exactly block_size bytes must be used verbatim; one byte
    // more must go through the pre-hash path. The two schedules may only
    // agree if the block size constant matches the sponge rate.
    for algo in SHA3_ALGOS {
        let block_key = vec![0x42u8; algo.block_size()];
        let long_key = vec![0x42u8; algo.block_size() + 1];

        assert_ne!(
            mac(algo, &block_key, b"msg"),
            mac(algo, &long_key, b"msg"),
            "{algo:?}"
        );

        let mut hashed_long_key = vec![0u8; algo.digest_size()];
        let mut digest = DigestState::new(algo);
        digest.update(&long_key);
        digest
            .finalize_reset_into(&mut hashed_long_key)
            .expect("Failed to finalize_reset_into(..)");

        assert_eq!(
            mac(algo, &long_key, b"msg"),
            mac(algo, &hashed_long_key, b"msg"),
            "{algo:?}"
        );
    }
}

#[test]
fn test_sha3_instances_are_reusable() {
    for algo in SHA3_ALGOS {
        let mut hmac = Hmac::new();
        hmac.set_key(algo, b"sponge key").expect("Failed to set_key(..)");

        let mut first = vec![0u8; algo.digest_size()];
        hmac.update(b"abc").expect("Failed to update(..)");
        hmac.finalize_into(&mut first)
            .expect("Failed to finalize_into(..)");

        let mut second = vec![0u8; algo.digest_size()];
        hmac.update(b"abc").expect("Failed to update(..)");
        hmac.finalize_into(&mut second)
            .expect("Failed to finalize_into(..)");

        assert_eq!(first, second, "{algo:?}");
        assert_eq!(first, mac(algo, b"sponge key", b"abc"), "{algo:?}");
    }
}
