// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search API response types

use serde::{Deserialize, Serialize};

use crate::guide::ProjectGuide;
use crate::search::SearchOutcome;

/// Response body for POST /search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchApiResponse {
    pub success: bool,
    /// The resolved guide
    pub guide: ProjectGuide,
    /// Whether the guide came from the cache
    pub cached: bool,
}

impl SearchApiResponse {
    pub fn new(outcome: SearchOutcome) -> Self {
        Self {
            success: true,
            guide: outcome.guide,
            cached: outcome.cached,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::{Category, Difficulty, Step};

    #[test]
    fn test_response_wire_format() {
        let outcome = SearchOutcome {
            guide: ProjectGuide {
                id: "origami-frog-1".to_string(),
                name: "Frog".to_string(),
                difficulty: Difficulty::Easy,
                category: Category::Animals,
                steps: vec![Step {
                    step_number: 1,
                    instruction: "Fold".to_string(),
                    image_url: None,
                }],
                source_url: None,
                thumbnail_url: None,
                is_favorite: None,
                is_completed: None,
            },
            cached: true,
        };

        let json = serde_json::to_value(SearchApiResponse::new(outcome)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["cached"], true);
        assert_eq!(json["guide"]["id"], "origami-frog-1");
    }
}
