// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Bundled starter catalog
//!
//! A read-only list of guides shipped with the binary, loaded wholesale
//! and filtered by category/difficulty. Not part of the search pipeline.

use std::sync::OnceLock;

use tracing::error;

use crate::guide::{Category, Difficulty, ProjectGuide};

const STARTER_JSON: &str = include_str!("../../data/starter_guides.json");

static STARTER: OnceLock<Vec<ProjectGuide>> = OnceLock::new();

/// The full bundled catalog
pub fn starter_guides() -> &'static [ProjectGuide] {
    STARTER.get_or_init(|| match serde_json::from_str(STARTER_JSON) {
        Ok(guides) => guides,
        Err(e) => {
            error!("Bundled starter catalog is invalid: {}", e);
            Vec::new()
        }
    })
}

/// Filter the catalog by optional category and difficulty
pub fn filter_guides(
    category: Option<Category>,
    difficulty: Option<Difficulty>,
) -> Vec<ProjectGuide> {
    starter_guides()
        .iter()
        .filter(|guide| category.map_or(true, |c| guide.category == c))
        .filter(|guide| difficulty.map_or(true, |d| guide.difficulty == d))
        .cloned()
        .collect()
}
