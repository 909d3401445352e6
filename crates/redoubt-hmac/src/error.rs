// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use redoubt_digest::DigestError;
use thiserror::Error;

/// HMAC engine error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacError {
    /// Operation requires a key but none has been installed
    #[error("no key has been installed; call set_key first")]
    NotKeyed,
    /// Error from the digest dispatch, propagated unchanged
    #[error(transparent)]
    Digest(#[from] DigestError),
}
