// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Uniform streaming digest dispatch over the MD5, SHA-1, SHA-2, and SHA-3
//! families
//!
//! One algorithm identifier selects block size, digest size, and a streaming
//! state, so keyed constructions above this layer are written once rather
//! than once per hash.
//!
//! References:
//! - RFC 1321: The MD5 Message-Digest Algorithm
//!   <https://datatracker.ietf.org/doc/html/rfc1321>
//! - FIPS 180-4: Secure Hash Standard (SHA-1, SHA-2)
//! - FIPS 202: SHA-3 Standard

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod algo;
mod error;
mod state;

pub use algo::{HashAlgo, MAX_BLOCK_SIZE, MAX_DIGEST_SIZE};
pub use error::DigestError;
pub use state::DigestState;
