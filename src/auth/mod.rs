// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared-code verification and device token minting
//!
//! The shared code is a family passphrase distributed to trusted devices,
//! not a cryptographic trust boundary, so a plain equality check is enough.

use rand::Rng;

/// Token length in characters
pub const TOKEN_LENGTH: usize = 32;

/// 64-symbol alphabet, matching nanoid's URL-safe default
const TOKEN_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Mint a random opaque device token
pub fn generate_device_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LENGTH)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

/// Check a submitted shared code against the configured one
pub fn verify_shared_code(submitted: &str, configured: &str) -> bool {
    submitted == configured
}
