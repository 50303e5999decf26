// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Bundled catalog endpoint

use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::guide::{Category, Difficulty, ProjectGuide};

/// Query parameters for GET /guides
///
/// Absent parameters mean "all".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuideFilter {
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
}

/// Response body for GET /guides
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidesResponse {
    pub guides: Vec<ProjectGuide>,
    pub count: usize,
}

/// GET /guides - List the bundled starter catalog, optionally filtered
pub async fn guides_handler(Query(filter): Query<GuideFilter>) -> Json<GuidesResponse> {
    let guides = catalog::filter_guides(filter.category, filter.difficulty);
    let count = guides.len();
    Json(GuidesResponse { guides, count })
}
