// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF extract-and-expand over a dispatched hash family
//!
//! Implementation per RFC 5869, driven by the streaming HMAC engine from
//! `redoubt-hmac`. Extract is a single HMAC invocation; Expand is a
//! counter-driven loop of HMAC rounds. Scratch key material is zeroized on
//! every exit path.
//!
//! References:
//! - RFC 5869: HMAC-based Extract-and-Expand Key Derivation Function (HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc5869>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod hkdf;

pub use error::HkdfError;
pub use hkdf::{expand, extract, hkdf};
pub use redoubt_hmac::HashAlgo;
