// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming HMAC over a dispatched hash family with secure memory handling
//!
//! Implementation per RFC 2104 / FIPS 198-1, keyed at runtime by a
//! [`HashAlgo`] identifier. One instance can be re-keyed and re-used across
//! messages; pads and intermediate digests are zeroized on drop.
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - FIPS 198-1: The Keyed-Hash Message Authentication Code (HMAC)

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod hmac;

pub use error::HmacError;
pub use hmac::Hmac;
pub use redoubt_digest::{HashAlgo, MAX_BLOCK_SIZE, MAX_DIGEST_SIZE};
