/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.database_error")]
    DatabaseError,
}

/// Raised when an authenticated actor lacks the rights for an operation.
/// Unauthenticated requests never reach the domain; the HTTP layer rejects them.
#[derive(Debug, thiserror::Error)]
pub enum AuthorizationError {
    #[error("auth.permission_denied")]
    PermissionDenied,
}
