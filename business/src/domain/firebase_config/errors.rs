use crate::domain::errors::{AuthorizationError, RepositoryError};

/// Validation messages are shown verbatim to the administrator,
/// so they stay human-readable rather than code-style.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("The uploaded file is not valid JSON.")]
    InvalidFormat,
    #[error("The uploaded file must contain a JSON object.")]
    InvalidShape,
    #[error(
        "The uploaded file must be a Firebase service account configuration (type must be \"service_account\")."
    )]
    WrongType,
    #[error("The Firebase config is missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

#[derive(Debug, thiserror::Error)]
pub enum FirebaseConfigError {
    #[error(transparent)]
    Validation(#[from] ConfigValidationError),
    #[error("firebase_config.not_configured")]
    NotConfigured,
    #[error("firebase_config.stored_config_invalid")]
    StoredConfigInvalid,
    #[error("auth.permission_denied")]
    Authorization(#[from] AuthorizationError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
