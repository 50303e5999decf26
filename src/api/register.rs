// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Device registration endpoint
//!
//! Validates the shared family code and mints an opaque device token.
//! Persistence is best-effort: the token is returned even when the
//! device record cannot be stored, so the client can operate without
//! server-side tracking.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth;

use super::errors::ApiError;
use super::http_server::AppState;

/// Request body for POST /register
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Shared family code distributed to trusted devices
    pub shared_code: String,
    /// Optional display name for the device
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
}

/// Response body for POST /register
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    /// The freshly minted device token
    pub device_token: String,
    pub message: String,
}

/// POST /register - Register a device against the shared family code
///
/// # Errors
/// - 401 Unauthorized: the submitted code does not match
pub async fn register_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    if !auth::verify_shared_code(&request.shared_code, &state.config.shared_code) {
        warn!("Registration rejected: shared code mismatch");
        return Err(ApiError::InvalidCode(
            "Invalid family code. Please check and try again!".to_string(),
        ));
    }

    let token = auth::generate_device_token();

    let message = match state
        .devices
        .create(&token, request.device_name.as_deref())
        .await
    {
        Ok(device) => {
            info!("Device registered: {}", device.device_name);
            "Device registered successfully!"
        }
        Err(e) => {
            // The token is still valid for the client even without a record
            warn!("Device persistence failed, continuing in local mode: {}", e);
            "Device registered successfully (local mode)"
        }
    };

    Ok(Json(RegisterResponse {
        success: true,
        device_token: token,
        message: message.to_string(),
    }))
}
