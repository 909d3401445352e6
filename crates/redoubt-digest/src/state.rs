// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming digest state, one tagged variant per algorithm

use digest::Digest;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use crate::algo::HashAlgo;
use crate::error::DigestError;

/// Streaming hash state for one algorithm.
///
/// Each variant carries only its own hasher state. Finalization writes the
/// digest and leaves the state fresh, so the owner can absorb a new message
/// without reconstructing the variant.
pub enum DigestState {
    /// MD5 state.
    Md5(Md5),
    /// SHA-1 state.
    Sha1(Sha1),
    /// SHA-224 state.
    Sha224(Sha224),
    /// SHA-256 state.
    Sha256(Sha256),
    /// SHA-384 state.
    Sha384(Sha384),
    /// SHA-512 state.
    Sha512(Sha512),
    /// SHA3-224 state.
    Sha3_224(Sha3_224),
    /// SHA3-256 state.
    Sha3_256(Sha3_256),
    /// SHA3-384 state.
    Sha3_384(Sha3_384),
    /// SHA3-512 state.
    Sha3_512(Sha3_512),
}

impl DigestState {
    /// Create a fresh state for `algo` with no bytes absorbed.
    pub fn new(algo: HashAlgo) -> Self {
        match algo {
            HashAlgo::Md5 => DigestState::Md5(Md5::new()),
            HashAlgo::Sha1 => DigestState::Sha1(Sha1::new()),
            HashAlgo::Sha224 => DigestState::Sha224(Sha224::new()),
            HashAlgo::Sha256 => DigestState::Sha256(Sha256::new()),
            HashAlgo::Sha384 => DigestState::Sha384(Sha384::new()),
            HashAlgo::Sha512 => DigestState::Sha512(Sha512::new()),
            HashAlgo::Sha3_224 => DigestState::Sha3_224(Sha3_224::new()),
            HashAlgo::Sha3_256 => DigestState::Sha3_256(Sha3_256::new()),
            HashAlgo::Sha3_384 => DigestState::Sha3_384(Sha3_384::new()),
            HashAlgo::Sha3_512 => DigestState::Sha3_512(Sha3_512::new()),
        }
    }

    /// Algorithm this state was created for.
    pub fn algo(&self) -> HashAlgo {
        match self {
            DigestState::Md5(_) => HashAlgo::Md5,
            DigestState::Sha1(_) => HashAlgo::Sha1,
            DigestState::Sha224(_) => HashAlgo::Sha224,
            DigestState::Sha256(_) => HashAlgo::Sha256,
            DigestState::Sha384(_) => HashAlgo::Sha384,
            DigestState::Sha512(_) => HashAlgo::Sha512,
            DigestState::Sha3_224(_) => HashAlgo::Sha3_224,
            DigestState::Sha3_256(_) => HashAlgo::Sha3_256,
            DigestState::Sha3_384(_) => HashAlgo::Sha3_384,
            DigestState::Sha3_512(_) => HashAlgo::Sha3_512,
        }
    }

    /// Absorb `data`, which may be empty.
    pub fn update(&mut self, data: &[u8]) {
        match self {
            DigestState::Md5(d) => d.update(data),
            DigestState::Sha1(d) => d.update(data),
            DigestState::Sha224(d) => d.update(data),
            DigestState::Sha256(d) => d.update(data),
            DigestState::Sha384(d) => d.update(data),
            DigestState::Sha512(d) => d.update(data),
            DigestState::Sha3_224(d) => d.update(data),
            DigestState::Sha3_256(d) => d.update(data),
            DigestState::Sha3_384(d) => d.update(data),
            DigestState::Sha3_512(d) => d.update(data),
        }
    }

    /// Write the digest into `out` and reset the state to fresh.
    ///
    /// `out` must be exactly [`HashAlgo::digest_size`] bytes and is left
    /// untouched on error.
    pub fn finalize_reset_into(&mut self, out: &mut [u8]) -> Result<(), DigestError> {
        let expected = self.algo().digest_size();
        if out.len() != expected {
            return Err(DigestError::InvalidBufferSize {
                expected,
                got: out.len(),
            });
        }

        match self {
            DigestState::Md5(d) => out.copy_from_slice(d.finalize_reset().as_slice()),
            DigestState::Sha1(d) => out.copy_from_slice(d.finalize_reset().as_slice()),
            DigestState::Sha224(d) => out.copy_from_slice(d.finalize_reset().as_slice()),
            DigestState::Sha256(d) => out.copy_from_slice(d.finalize_reset().as_slice()),
            DigestState::Sha384(d) => out.copy_from_slice(d.finalize_reset().as_slice()),
            DigestState::Sha512(d) => out.copy_from_slice(d.finalize_reset().as_slice()),
            DigestState::Sha3_224(d) => out.copy_from_slice(d.finalize_reset().as_slice()),
            DigestState::Sha3_256(d) => out.copy_from_slice(d.finalize_reset().as_slice()),
            DigestState::Sha3_384(d) => out.copy_from_slice(d.finalize_reset().as_slice()),
            DigestState::Sha3_512(d) => out.copy_from_slice(d.finalize_reset().as_slice()),
        }

        Ok(())
    }
}
