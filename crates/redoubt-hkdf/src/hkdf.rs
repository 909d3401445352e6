// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF-Extract and HKDF-Expand per RFC 5869

use core::cmp::min;

use redoubt_hmac::{HashAlgo, Hmac, MAX_DIGEST_SIZE};
use zeroize::Zeroizing;

use crate::error::HkdfError;

/// HKDF-Extract per RFC 5869 Section 2.2.
///
/// `prk` must be exactly `algo.digest_size()` bytes. An empty `salt` is
/// replaced by a zero-filled salt of digest size; an empty HMAC key expands
/// to the same all-zero pad block, so the substitution only makes the RFC
/// default explicit.
pub fn extract(algo: HashAlgo, salt: &[u8], ikm: &[u8], prk: &mut [u8]) -> Result<(), HkdfError> {
    const ZERO_SALT: [u8; MAX_DIGEST_SIZE] = [0u8; MAX_DIGEST_SIZE];

    let salt = if salt.is_empty() {
        &ZERO_SALT[..algo.digest_size()]
    } else {
        salt
    };

    let mut hmac = Hmac::new();
    hmac.set_key(algo, salt)?;
    hmac.update(ikm)?;
    hmac.finalize_into(prk)?;

    Ok(())
}

/// HKDF-Expand per RFC 5869 Section 2.3.
///
/// Fills all of `okm`; an empty `okm` is a valid no-op. Fails with
/// [`HkdfError::OutputTooLong`] when `okm.len()` exceeds 255 times the
/// digest size.
pub fn expand(algo: HashAlgo, prk: &[u8], info: &[u8], okm: &mut [u8]) -> Result<(), HkdfError> {
    let hash_size = algo.digest_size();

    // RFC 5869: N = ceil(L / HashLen) must not exceed 255.
    let rounds = okm.len().div_ceil(hash_size);
    if rounds > 255 {
        return Err(HkdfError::OutputTooLong);
    }

    let mut t = Zeroizing::new([0u8; MAX_DIGEST_SIZE]);
    let mut hmac = Hmac::new();
    let mut offset = 0;

    for n in 1..=rounds {
        // T(0) is empty; every later round chains the previous block.
        let t_len = if n == 1 { 0 } else { hash_size };

        // Re-keyed every round; finalize has already reset the instance,
        // so this keeps each round's initialization explicit.
        hmac.set_key(algo, prk)?;
        hmac.update(&t[..t_len])?;
        hmac.update(info)?;
        hmac.update(&[n as u8])?;
        hmac.finalize_into(&mut t[..hash_size])?;

        let len = min(hash_size, okm.len() - offset);
        okm[offset..offset + len].copy_from_slice(&t[..len]);
        offset += len;
    }

    Ok(())
}

/// Full HKDF per RFC 5869: Extract, then Expand.
pub fn hkdf(
    algo: HashAlgo,
    ikm: &[u8],
    salt: &[u8],
    info: &[u8],
    okm: &mut [u8],
) -> Result<(), HkdfError> {
    let hash_size = algo.digest_size();
    let mut prk = Zeroizing::new([0u8; MAX_DIGEST_SIZE]);

    extract(algo, salt, ikm, &mut prk[..hash_size])?;
    expand(algo, &prk[..hash_size], info, okm)
}
