use crate::store::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        error!(error = %self, "Store operation failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal store error").into_response()
    }
}
