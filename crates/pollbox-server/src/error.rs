//! HTTP mapping for domain errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pollbox_core::error::{ClientCode, PollError};
use tracing::error;

/// Wrapper giving `PollError` an HTTP response shape. Handlers return
/// `Result<_, HttpError>` and use `?` on store/domain calls.
#[derive(Debug)]
pub struct HttpError(pub PollError);

impl From<PollError> for HttpError {
    fn from(e: PollError) -> Self {
        Self(e)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::InvalidVoteTarget => StatusCode::BAD_REQUEST,
            ClientCode::ConfigInvalid | ClientCode::StoreUnavailable | ClientCode::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        error!(code = code.as_str(), "request failed: {}", self.0);

        (status, format!("{}: {}", code.as_str(), self.0)).into_response()
    }
}
