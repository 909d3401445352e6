// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Digest dispatch error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestError {
    /// Output buffer length does not match the digest size of the algorithm
    #[error("output buffer length {got} does not match digest size {expected}")]
    InvalidBufferSize {
        /// Digest size of the selected algorithm
        expected: usize,
        /// Length of the buffer supplied by the caller
        got: usize,
    },
}
