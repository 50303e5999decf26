// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for the guide search pipeline

use thiserror::Error;

use crate::guide::ProjectGuide;

/// Result of a successful search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The resolved guide
    pub guide: ProjectGuide,
    /// Whether the guide came from the cache
    pub cached: bool,
}

/// Errors that can occur during a search
///
/// Display strings double as the user-facing error messages; cache
/// failures never appear here because the orchestrator swallows them.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query failed validation
    #[error("{reason}")]
    InvalidQuery {
        /// Why the query was rejected
        reason: String,
    },

    /// No model credential was supplied
    #[error("No API key configured. Please add your OpenAI API key in Settings to use AI search!")]
    CredentialMissing,

    /// The model endpoint rejected the supplied credential
    #[error("Invalid OpenAI API key. Please check your API key in Settings!")]
    CredentialInvalid,

    /// The fetch yielded nothing usable
    #[error("Couldn't find instructions for \"{query}\". Try a different search term!")]
    NotFound {
        /// The query that found nothing
        query: String,
    },

    /// Extraction yielded no structured result
    #[error("Couldn't understand the instructions for \"{query}\". Try a different search!")]
    NotUnderstood {
        /// The query whose content could not be structured
        query: String,
    },

    /// Model call failed for a reason unrelated to the credential
    #[error("AI processing failed. Please try again!")]
    Upstream {
        /// Underlying failure, for logging only
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_user_facing() {
        let error = SearchError::NotFound {
            query: "frog".to_string(),
        };
        assert!(error.to_string().contains("\"frog\""));

        let error = SearchError::CredentialMissing;
        assert!(error.to_string().contains("API key"));

        let error = SearchError::Upstream {
            message: "boom".to_string(),
        };
        // Internal detail never leaks into the user-facing message
        assert!(!error.to_string().contains("boom"));
    }
}
