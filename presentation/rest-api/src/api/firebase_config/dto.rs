use poem_openapi::{Multipart, Object, types::multipart::Upload};

use business::domain::firebase_config::model::FirebaseConfigSummary;

/// Multipart form carrying the service-account JSON file.
#[derive(Multipart)]
pub struct UploadFirebaseConfigRequest {
    /// The service-account JSON downloaded from the Firebase console
    pub file: Option<Upload>,
}

/// Stored credential details. The private key is never echoed back.
#[derive(Debug, Clone, PartialEq, Object)]
pub struct FirebaseConfigResponse {
    pub project_id: String,
    pub client_email: String,
    pub private_key_id: String,
    /// Hex SHA-256 of the stored document
    pub fingerprint: String,
}

impl From<FirebaseConfigSummary> for FirebaseConfigResponse {
    fn from(summary: FirebaseConfigSummary) -> Self {
        Self {
            project_id: summary.project_id,
            client_email: summary.client_email,
            private_key_id: summary.private_key_id,
            fingerprint: summary.fingerprint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_summary_fields() {
        let response: FirebaseConfigResponse = FirebaseConfigSummary {
            project_id: "forum-push".to_string(),
            client_email: "push@forum-push.iam.gserviceaccount.com".to_string(),
            private_key_id: "abc123".to_string(),
            fingerprint: "f00d".to_string(),
        }
        .into();

        assert_eq!(response.project_id, "forum-push");
        assert_eq!(
            response.client_email,
            "push@forum-push.iam.gserviceaccount.com"
        );
        assert_eq!(response.private_key_id, "abc123");
        assert_eq!(response.fingerprint, "f00d");
    }
}
