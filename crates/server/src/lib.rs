use std::collections::HashMap;

use api_types::DataResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};

mod cash_flows;
mod seed;
mod server;

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ServerError::Engine(EngineError::Validation(errors)) => (
                StatusCode::BAD_REQUEST,
                Json(DataResponse::fail("invalid cash flow data", Some(errors))),
            )
                .into_response(),
            ServerError::Engine(EngineError::KeyNotFound(_)) => (
                StatusCode::NOT_FOUND,
                Json(DataResponse::<HashMap<String, String>>::fail(
                    "cash flow not available",
                    None,
                )),
            )
                .into_response(),
            ServerError::Generic(err) => {
                tracing::error!("unexpected server error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(DataResponse::<HashMap<String, String>>::error(err, None)),
                )
                    .into_response()
            }
        }
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
