// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::search::SearchError;

/// JSON error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    /// Present (true) when the client should prompt for a model credential
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_credential: Option<bool>,
}

/// API-level errors with their HTTP mapping
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Malformed request body or parameters (400)
    InvalidRequest(String),
    /// No model credential supplied (400, needsCredential)
    CredentialMissing(String),
    /// Model credential rejected upstream (401, needsCredential)
    CredentialInvalid(String),
    /// Wrong shared code at registration (401)
    InvalidCode(String),
    /// Nothing usable found for the query (404)
    NotFound(String),
    /// Generic processing failure (500)
    InternalError(String),
}

impl ApiError {
    pub fn to_response(&self) -> ErrorResponse {
        let (error, needs_credential) = match self {
            ApiError::InvalidRequest(msg) => (msg.clone(), None),
            ApiError::CredentialMissing(msg) => (msg.clone(), Some(true)),
            ApiError::CredentialInvalid(msg) => (msg.clone(), Some(true)),
            ApiError::InvalidCode(msg) => (msg.clone(), None),
            ApiError::NotFound(msg) => (msg.clone(), None),
            ApiError::InternalError(msg) => (msg.clone(), None),
        };

        ErrorResponse {
            error,
            needs_credential,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_) | ApiError::CredentialMissing(_) => 400,
            ApiError::CredentialInvalid(_) | ApiError::InvalidCode(_) => 401,
            ApiError::NotFound(_) => 404,
            ApiError::InternalError(_) => 500,
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(e: SearchError) -> Self {
        let message = e.to_string();
        match e {
            SearchError::InvalidQuery { .. } => ApiError::InvalidRequest(message),
            SearchError::CredentialMissing => ApiError::CredentialMissing(message),
            SearchError::CredentialInvalid => ApiError::CredentialInvalid(message),
            SearchError::NotFound { .. } | SearchError::NotUnderstood { .. } => {
                ApiError::NotFound(message)
            }
            SearchError::Upstream { .. } => ApiError::InternalError(message),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::CredentialMissing(msg) => write!(f, "Credential missing: {}", msg),
            ApiError::CredentialInvalid(msg) => write!(f, "Credential invalid: {}", msg),
            ApiError::InvalidCode(msg) => write!(f, "Invalid code: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_response())).into_response()
    }
}
