// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search API request types

use serde::{Deserialize, Serialize};

/// Request body for POST /search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchApiRequest {
    /// Free-text search query (required, max 500 chars)
    pub query: String,

    /// Caller-supplied model access key; never stored server-side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
}

impl SearchApiRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        if self.query.trim().is_empty() {
            return Err("Query is required".to_string());
        }
        if self.query.len() > 500 {
            return Err("Query too long (max 500 characters)".to_string());
        }
        Ok(())
    }
}
