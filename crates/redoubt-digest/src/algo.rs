// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash algorithm identifiers and their size constants

/// Largest digest size across all supported algorithms (SHA-512, SHA3-512).
pub const MAX_DIGEST_SIZE: usize = 64;

/// Largest block size across all supported algorithms (SHA3-224 rate).
pub const MAX_BLOCK_SIZE: usize = 144;

/// Identifier for one member of the supported hash family.
///
/// The set is closed and every variant is always compiled in. Block and
/// digest sizes are the RFC/FIPS constants; for SHA-3 the block size is the
/// sponge rate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HashAlgo {
    /// MD5 (RFC 1321). Kept for legacy protocol compatibility only.
    Md5,
    /// SHA-1 (FIPS 180-4).
    Sha1,
    /// SHA-224 (FIPS 180-4).
    Sha224,
    /// SHA-256 (FIPS 180-4).
    Sha256,
    /// SHA-384 (FIPS 180-4).
    Sha384,
    /// SHA-512 (FIPS 180-4).
    Sha512,
    /// SHA3-224 (FIPS 202).
    Sha3_224,
    /// SHA3-256 (FIPS 202).
    Sha3_256,
    /// SHA3-384 (FIPS 202).
    Sha3_384,
    /// SHA3-512 (FIPS 202).
    Sha3_512,
}

impl HashAlgo {
    /// All supported algorithms, for table-driven callers and tests.
    pub const ALL: [HashAlgo; 10] = [
        HashAlgo::Md5,
        HashAlgo::Sha1,
        HashAlgo::Sha224,
        HashAlgo::Sha256,
        HashAlgo::Sha384,
        HashAlgo::Sha512,
        HashAlgo::Sha3_224,
        HashAlgo::Sha3_256,
        HashAlgo::Sha3_384,
        HashAlgo::Sha3_512,
    ];

    /// Digest size in bytes.
    pub const fn digest_size(self) -> usize {
        match self {
            HashAlgo::Md5 => 16,
            HashAlgo::Sha1 => 20,
            HashAlgo::Sha224 => 28,
            HashAlgo::Sha256 => 32,
            HashAlgo::Sha384 => 48,
            HashAlgo::Sha512 => 64,
            HashAlgo::Sha3_224 => 28,
            HashAlgo::Sha3_256 => 32,
            HashAlgo::Sha3_384 => 48,
            HashAlgo::Sha3_512 => 64,
        }
    }

    /// Input block size in bytes (sponge rate for SHA-3).
    pub const fn block_size(self) -> usize {
        match self {
            HashAlgo::Md5 => 64,
            HashAlgo::Sha1 => 64,
            HashAlgo::Sha224 => 64,
            HashAlgo::Sha256 => 64,
            HashAlgo::Sha384 => 128,
            HashAlgo::Sha512 => 128,
            HashAlgo::Sha3_224 => 144,
            HashAlgo::Sha3_256 => 136,
            HashAlgo::Sha3_384 => 104,
            HashAlgo::Sha3_512 => 72,
        }
    }
}
