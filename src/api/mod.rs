// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod guides;
pub mod http_server;
pub mod register;
pub mod search;

pub use errors::{ApiError, ErrorResponse};
pub use guides::{guides_handler, GuideFilter, GuidesResponse};
pub use http_server::{create_app, start_server, AppState};
pub use register::{register_handler, RegisterRequest, RegisterResponse};
pub use search::{search_handler, SearchApiRequest, SearchApiResponse};
