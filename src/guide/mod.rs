// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core guide types shared by the catalog, cache and search pipeline

use serde::{Deserialize, Serialize};

/// Difficulty rating for a folding project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Category a folding project belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Animals,
    Toys,
    Flowers,
    Decorations,
    Other,
}

/// A single folding step within a guide
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// 1-based step number, contiguous within a guide
    pub step_number: u32,
    /// Instruction text for this step
    pub instruction: String,
    /// Optional illustration URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A structured paper-folding project with ordered steps
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGuide {
    /// Globally unique identifier
    pub id: String,
    /// Display name of the project
    pub name: String,
    pub difficulty: Difficulty,
    pub category: Category,
    /// Ordered folding steps
    pub steps: Vec<Step>,
    /// Page the instructions were extracted from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Client-only flag, never persisted server-side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    /// Client-only flag, never persisted server-side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

/// Check that step numbers are 1-based and contiguous
pub fn steps_are_contiguous(steps: &[Step]) -> bool {
    steps
        .iter()
        .enumerate()
        .all(|(i, step)| step.step_number == (i as u32) + 1)
}
