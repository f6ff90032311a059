use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    application::usercases::subscriptions::SubscriptionError,
    domain::value_objects::validation::FieldError,
};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl IntoResponse for SubscriptionError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (message, errors) = match self {
            SubscriptionError::Validation(result) => (
                "validation failed".to_string(),
                Some(result.errors().to_vec()),
            ),
            // Don't leak storage details to the client
            SubscriptionError::Internal(_) => ("Internal server error".to_string(), None),
            other => (other.to_string(), None),
        };

        let body = Json(ErrorResponse {
            code: status.as_u16(),
            message,
            errors,
        });

        (status, body).into_response()
    }
}
