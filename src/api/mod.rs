// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod feedback;
pub mod handlers;
pub mod history;
pub mod http_server;
pub mod search;
pub mod summary;
pub mod tts;

pub use errors::ErrorResponse;
pub use feedback::{FeedbackAck, FeedbackRequest};
pub use handlers::HealthResponse;
pub use history::HistoryResponse;
pub use http_server::{build_router, start_server, AppState};
pub use search::SearchResponse;
pub use summary::SummaryResponse;
pub use tts::{TtsRequest, TtsResponse};
