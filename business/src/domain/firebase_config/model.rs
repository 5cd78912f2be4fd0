use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use super::errors::ConfigValidationError;

pub const SERVICE_ACCOUNT_TYPE: &str = "service_account";

/// Fields a service-account credential must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "type",
    "project_id",
    "private_key_id",
    "private_key",
    "client_email",
    "client_id",
];

/// A Firebase service-account credential that passed validation.
///
/// Keeps the uploaded text untouched next to the decoded object so the
/// settings store receives exactly what the administrator sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceAccountConfig {
    raw: String,
    fields: Map<String, Value>,
}

impl ServiceAccountConfig {
    /// Decodes `contents` and checks it against the service-account schema.
    ///
    /// Only string emptiness is checked on required fields: a numeric
    /// `client_id` is accepted, while `""` or `null` counts as missing.
    ///
    /// Decoding uses serde_json's limits: nesting deeper than 128 levels
    /// or numbers outside the f64 range are reported as `InvalidFormat`.
    /// Credentials issued by Google are flat string maps and never hit either.
    pub fn parse(contents: &[u8]) -> Result<Self, ConfigValidationError> {
        let value: Value =
            serde_json::from_slice(contents).map_err(|_| ConfigValidationError::InvalidFormat)?;

        let Value::Object(fields) = value else {
            return Err(ConfigValidationError::InvalidShape);
        };

        if fields.get("type").and_then(Value::as_str) != Some(SERVICE_ACCOUNT_TYPE) {
            return Err(ConfigValidationError::WrongType);
        }

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| is_missing(fields.get(**field)))
            .map(|field| field.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ConfigValidationError::MissingFields(missing));
        }

        // serde_json rejects invalid UTF-8, so this only guards the type change.
        let raw =
            String::from_utf8(contents.to_vec()).map_err(|_| ConfigValidationError::InvalidFormat)?;

        Ok(Self { raw, fields })
    }

    /// The document exactly as uploaded.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn project_id(&self) -> String {
        self.field_text("project_id")
    }

    pub fn private_key_id(&self) -> String {
        self.field_text("private_key_id")
    }

    pub fn client_email(&self) -> String {
        self.field_text("client_email")
    }

    /// Hex SHA-256 of the raw document, safe to show in place of the key.
    pub fn fingerprint(&self) -> String {
        format!("{:x}", Sha256::digest(self.raw.as_bytes()))
    }

    pub fn summary(&self) -> FirebaseConfigSummary {
        FirebaseConfigSummary {
            project_id: self.project_id(),
            client_email: self.client_email(),
            private_key_id: self.private_key_id(),
            fingerprint: self.fingerprint(),
        }
    }

    // Non-string values pass validation, so render them as JSON text.
    fn field_text(&self, name: &str) -> String {
        match self.fields.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Public view of a stored credential. Never carries the private key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseConfigSummary {
    pub project_id: String,
    pub client_email: String,
    pub private_key_id: String,
    pub fingerprint: String,
}
