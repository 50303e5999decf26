// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Device record persistence
//!
//! A device record is created once at registration and mutated only by
//! bumping its last-used timestamp on successful verification. The token
//! itself never changes after issuance.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A registered device
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Opaque client credential, immutable after issuance
    pub device_token: String,
    /// Display name chosen at registration
    pub device_name: String,
    pub created_at: DateTime<Utc>,
    pub last_used: DateTime<Utc>,
}

/// Errors from a device store backend
#[derive(Debug, Error)]
pub enum DeviceStoreError {
    #[error("device store unavailable: {0}")]
    Backend(String),
}

const DEFAULT_DEVICE_NAME: &str = "My iPad";

/// Persistence for registered devices
#[async_trait]
pub trait DeviceStore: Send + Sync {
    /// Persist a new device record for a freshly minted token
    async fn create(&self, token: &str, name: Option<&str>) -> Result<Device, DeviceStoreError>;

    /// Look up a device by token, bumping its last-used timestamp on a hit
    async fn verify(&self, token: &str) -> Result<Option<Device>, DeviceStoreError>;
}

/// In-memory device store
pub struct MemoryDeviceStore {
    devices: RwLock<HashMap<String, Device>>,
}

impl MemoryDeviceStore {
    pub fn new() -> Self {
        Self {
            devices: RwLock::new(HashMap::new()),
        }
    }

    /// Number of registered devices
    pub fn len(&self) -> usize {
        self.devices.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryDeviceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeviceStore for MemoryDeviceStore {
    async fn create(&self, token: &str, name: Option<&str>) -> Result<Device, DeviceStoreError> {
        let now = Utc::now();
        let device = Device {
            device_token: token.to_string(),
            device_name: name.unwrap_or(DEFAULT_DEVICE_NAME).to_string(),
            created_at: now,
            last_used: now,
        };

        let mut devices = self
            .devices
            .write()
            .map_err(|e| DeviceStoreError::Backend(e.to_string()))?;
        devices.insert(token.to_string(), device.clone());
        Ok(device)
    }

    async fn verify(&self, token: &str) -> Result<Option<Device>, DeviceStoreError> {
        let mut devices = self
            .devices
            .write()
            .map_err(|e| DeviceStoreError::Backend(e.to_string()))?;

        Ok(devices.get_mut(token).map(|device| {
            device.last_used = Utc::now();
            device.clone()
        }))
    }
}
