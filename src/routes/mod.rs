//! HTTP handlers and the error-kind to status-code mapping.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;

use crate::dto::reservations::{MutationErrorBody, QueryErrorBody};
use crate::services::ServiceError;

pub mod reservations;

/// Explicit mapping from service outcomes to HTTP statuses. Every error is
/// surfaced to the caller; none are collapsed into a generic 500.
pub fn error_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Builds the `{"error", "details"}` body used by the query endpoint.
pub fn query_error_response(context: &str, err: &ServiceError) -> HttpResponse {
    HttpResponse::build(error_status(err)).json(QueryErrorBody {
        error: context.to_string(),
        details: err.to_string(),
    })
}

/// Builds the `{"Error", "Message"}` body used by the mutation endpoints.
pub fn mutation_error_response(context: &str, err: &ServiceError) -> HttpResponse {
    HttpResponse::build(error_status(err)).json(MutationErrorBody {
        error: context.to_string(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_per_error_kind() {
        assert_eq!(
            error_status(&ServiceError::Validation("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(&ServiceError::NotFound("x".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_status(&ServiceError::Internal("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
