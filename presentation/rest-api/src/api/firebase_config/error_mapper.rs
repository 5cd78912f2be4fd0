use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::firebase_config::errors::FirebaseConfigError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for FirebaseConfigError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            FirebaseConfigError::Validation(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "ValidationError")
            }
            FirebaseConfigError::NotConfigured => (StatusCode::NOT_FOUND, "NotFound"),
            FirebaseConfigError::Authorization(_) => (StatusCode::FORBIDDEN, "PermissionDenied"),
            FirebaseConfigError::StoredConfigInvalid | FirebaseConfigError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, ErrorResponse::new(name, self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::{AuthorizationError, RepositoryError};
    use business::domain::firebase_config::errors::ConfigValidationError;

    #[test]
    fn should_map_validation_errors_to_unprocessable_entity_with_message() {
        let error: FirebaseConfigError = ConfigValidationError::MissingFields(vec![
            "client_email".to_string(),
            "client_id".to_string(),
        ])
        .into();

        let (status, json) = error.into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(
            json.0.message,
            "The Firebase config is missing required fields: client_email, client_id"
        );
    }

    #[test]
    fn should_map_permission_denied_to_forbidden() {
        let error = FirebaseConfigError::Authorization(AuthorizationError::PermissionDenied);

        let (status, json) = error.into_error_response();

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json.0.message, "auth.permission_denied");
    }

    #[test]
    fn should_map_not_configured_to_not_found() {
        let (status, _) = FirebaseConfigError::NotConfigured.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_hide_repository_details() {
        let error = FirebaseConfigError::Repository(RepositoryError::DatabaseError);

        let (status, json) = error.into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
