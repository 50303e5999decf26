// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Structured guide extraction from scraped web content

use thiserror::Error;

pub mod client;

pub use client::InstructionExtractor;

/// Errors from the extraction call
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The model endpoint rejected the supplied credential
    #[error("credential rejected by model endpoint")]
    CredentialRejected,

    /// Non-success response from the model endpoint
    #[error("model API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body returned by the endpoint
        message: String,
    },

    /// Transport-level failure
    #[error("model request failed: {0}")]
    Http(String),

    /// The model's output was not the requested JSON shape
    #[error("model returned malformed JSON: {0}")]
    MalformedResponse(String),
}
