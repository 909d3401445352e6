// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod sha3;

use crate::{HashAlgo, Hmac};

/// One-shot MAC helper used across the vector suites.
pub(crate) fn mac(algo: HashAlgo, key: &[u8], msg: &[u8]) -> Vec<u8> {
    let mut hmac = Hmac::new();
    hmac.set_key(algo, key).expect("Failed to set_key(..)");
    hmac.update(msg).expect("Failed to update(..)");

    let mut tag = vec![0u8; algo.digest_size()];
    hmac.finalize_into(&mut tag)
        .expect("Failed to finalize_into(..)");
    tag
}
