// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC state machine per RFC 2104

use redoubt_digest::{DigestError, DigestState, HashAlgo, MAX_BLOCK_SIZE, MAX_DIGEST_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::HmacError;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5C;

/// Streaming HMAC instance.
///
/// Created unkeyed; [`set_key`](Hmac::set_key) installs an algorithm and a
/// key of any length (keys longer than the hash block are pre-hashed per
/// RFC 2104). After [`finalize_into`](Hmac::finalize_into) the instance is
/// immediately ready for another message under the same key, and `set_key`
/// may be called again at any time to re-key it.
///
/// The inner hash is keyed lazily: the XOR-expanded inner pad is absorbed on
/// the first `update` or `finalize_into` after keying, so finalizing with no
/// prior `update` yields the MAC of the empty message.
///
/// Pads and the intermediate inner digest are wiped on drop, on re-key, and
/// on [`clear`](Hmac::clear).
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Hmac {
    /// `None` until a key has been installed.
    #[zeroize(skip)]
    digest: Option<DigestState>,
    /// Key XOR 0x36, zero-padded to the algorithm's block size.
    ipad: [u8; MAX_BLOCK_SIZE],
    /// Key XOR 0x5c, zero-padded to the algorithm's block size.
    opad: [u8; MAX_BLOCK_SIZE],
    /// Scratch for Hash(ipad || message) between the inner and outer pass.
    inner_digest: [u8; MAX_DIGEST_SIZE],
    /// True iff the inner hash has already absorbed `ipad`.
    #[zeroize(skip)]
    inner_keyed: bool,
}

impl Hmac {
    /// Create an unkeyed instance.
    pub fn new() -> Self {
        Self {
            digest: None,
            ipad: [0u8; MAX_BLOCK_SIZE],
            opad: [0u8; MAX_BLOCK_SIZE],
            inner_digest: [0u8; MAX_DIGEST_SIZE],
            inner_keyed: false,
        }
    }

    /// Algorithm of the installed key, `None` while unkeyed.
    pub fn algo(&self) -> Option<HashAlgo> {
        self.digest.as_ref().map(DigestState::algo)
    }

    /// Install `key` for `algo`, computing the inner and outer pads.
    ///
    /// A previously installed key is released and wiped first, so one
    /// instance can be re-keyed indefinitely. The key may be empty; keys
    /// longer than `algo.block_size()` are replaced by their digest.
    pub fn set_key(&mut self, algo: HashAlgo, key: &[u8]) -> Result<(), HmacError> {
        self.clear();

        let mut digest = DigestState::new(algo);
        let block_size = algo.block_size();

        let key_len = if key.len() <= block_size {
            self.ipad[..key.len()].copy_from_slice(key);
            key.len()
        } else {
            let digest_size = algo.digest_size();
            digest.update(key);
            digest.finalize_reset_into(&mut self.ipad[..digest_size])?;
            digest_size
        };

        // ipad[key_len..block_size] must be zero before the XOR expansion;
        // clear() above already wiped the full pad.
        for i in 0..block_size {
            self.opad[i] = self.ipad[i] ^ OPAD;
            self.ipad[i] ^= IPAD;
        }

        self.digest = Some(digest);
        Ok(())
    }

    /// Absorb `msg`, which may be empty.
    pub fn update(&mut self, msg: &[u8]) -> Result<(), HmacError> {
        let Some(digest) = self.digest.as_mut() else {
            return Err(HmacError::NotKeyed);
        };

        Self::key_inner_digest(digest, &self.ipad, &mut self.inner_keyed);
        digest.update(msg);

        Ok(())
    }

    /// Write the tag into `tag` and reset for another message under the
    /// same key.
    ///
    /// `tag` must be exactly `digest_size` bytes for the keyed algorithm.
    /// On error the tag buffer contents are unspecified and must not be
    /// used.
    pub fn finalize_into(&mut self, tag: &mut [u8]) -> Result<(), HmacError> {
        let Some(digest) = self.digest.as_mut() else {
            return Err(HmacError::NotKeyed);
        };

        let algo = digest.algo();
        let block_size = algo.block_size();
        let digest_size = algo.digest_size();

        if tag.len() != digest_size {
            return Err(HmacError::Digest(DigestError::InvalidBufferSize {
                expected: digest_size,
                got: tag.len(),
            }));
        }

        // Supports MACing the empty message: finalize with no prior update.
        Self::key_inner_digest(digest, &self.ipad, &mut self.inner_keyed);

        digest.finalize_reset_into(&mut self.inner_digest[..digest_size])?;
        digest.update(&self.opad[..block_size]);
        digest.update(&self.inner_digest[..digest_size]);
        digest.finalize_reset_into(tag)?;

        self.inner_keyed = false;

        Ok(())
    }

    /// Release the digest state and wipe all key-derived material.
    ///
    /// Idempotent; the instance can be re-keyed with
    /// [`set_key`](Hmac::set_key) afterwards.
    pub fn clear(&mut self) {
        self.digest = None;
        self.inner_keyed = false;
        self.zeroize();
    }

    /// Absorb the inner pad once per message.
    ///
    /// Shared prologue of `update` and `finalize_into`; keying lazily here
    /// lets one key schedule serve any number of messages.
    fn key_inner_digest(
        digest: &mut DigestState,
        ipad: &[u8; MAX_BLOCK_SIZE],
        inner_keyed: &mut bool,
    ) {
        if !*inner_keyed {
            let block_size = digest.algo().block_size();
            digest.update(&ipad[..block_size]);
            *inner_keyed = true;
        }
    }

    #[cfg(test)]
    pub(crate) fn pads(&self) -> (&[u8; MAX_BLOCK_SIZE], &[u8; MAX_BLOCK_SIZE]) {
        (&self.ipad, &self.opad)
    }
}

impl Default for Hmac {
    fn default() -> Self {
        Self::new()
    }
}
