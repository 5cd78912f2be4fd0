use std::collections::HashSet;

use super::error::{ConfigError, required_var};

/// Settings for verifying Firebase ID tokens.
///
/// Environment variables:
/// - FIREBASE_PROJECT_ID: project whose tokens are accepted (required)
/// - FIREBASE_ADMIN_UIDS: comma-separated UIDs granted admin rights in
///   addition to users carrying the `admin` custom claim (optional)
#[derive(Debug, Clone)]
pub struct FirebaseAuthConfig {
    pub project_id: String,
    pub admin_uids: HashSet<String>,
}

impl FirebaseAuthConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let project_id = required_var("FIREBASE_PROJECT_ID")?;
        let admin_uids = std::env::var("FIREBASE_ADMIN_UIDS")
            .map(|raw| parse_admin_uids(&raw))
            .unwrap_or_default();

        Ok(Self {
            project_id,
            admin_uids,
        })
    }

    pub fn issuer(&self) -> String {
        format!("https://securetoken.google.com/{}", self.project_id)
    }

    pub fn is_admin(&self, uid: &str, admin_claim: bool) -> bool {
        admin_claim || self.admin_uids.contains(uid)
    }
}

fn parse_admin_uids(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|uid| !uid.is_empty())
        .map(String::from)
        .collect()
}
