use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use jsonwebtoken::{Algorithm, DecodingKey, Header, Validation, decode, decode_header};
use once_cell::sync::Lazy;
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;

use business::domain::shared::value_objects::{Actor, UserId};

use crate::config::firebase_auth_config::FirebaseAuthConfig;

const GOOGLE_CERTS_URL: &str =
    "https://www.googleapis.com/robot/v1/metadata/x509/securetoken@system.gserviceaccount.com";
const CACHE_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct FirebaseClaims {
    sub: String,
    email: Option<String>,
    iss: String,
    aud: String,
    exp: u64,
    iat: u64,
    /// Custom claim set through the Admin SDK for forum administrators.
    #[serde(default)]
    admin: bool,
}

struct CachedCerts {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Instant,
}

static CERTS_CACHE: Lazy<RwLock<Option<CachedCerts>>> = Lazy::new(|| RwLock::new(None));

async fn fetch_google_certs() -> Result<HashMap<String, DecodingKey>, String> {
    let response: HashMap<String, String> = reqwest::get(GOOGLE_CERTS_URL)
        .await
        .map_err(|e| format!("auth.certs_fetch_failed: {e}"))?
        .json()
        .await
        .map_err(|e| format!("auth.certs_parse_failed: {e}"))?;

    response
        .into_iter()
        .map(|(kid, pem)| {
            DecodingKey::from_rsa_pem(pem.as_bytes())
                .map(|key| (kid, key))
                .map_err(|e| format!("auth.cert_decode_failed: {e}"))
        })
        .collect()
}

async fn refresh_certs_if_stale() -> Result<(), String> {
    {
        let cache = CERTS_CACHE
            .read()
            .map_err(|e| format!("auth.cache_read_failed: {e}"))?;
        if let Some(cached) = cache.as_ref()
            && cached.fetched_at.elapsed() < CACHE_TTL
        {
            return Ok(());
        }
    }

    let keys = fetch_google_certs().await?;
    tracing::debug!(count = keys.len(), "refreshed Google signing certificates");

    let mut cache = CERTS_CACHE
        .write()
        .map_err(|e| format!("auth.cache_write_failed: {e}"))?;
    *cache = Some(CachedCerts {
        keys,
        fetched_at: Instant::now(),
    });

    Ok(())
}

/// Verifies signature, audience, issuer and expiry against cached certs.
/// The caller must refresh the cache first.
fn verify_token(token: &str, config: &FirebaseAuthConfig) -> Result<FirebaseClaims, String> {
    let header: Header =
        decode_header(token).map_err(|e| format!("auth.invalid_token_header: {e}"))?;

    let kid = header.kid.ok_or("auth.missing_kid")?;

    let cache = CERTS_CACHE
        .read()
        .map_err(|e| format!("auth.cache_read_failed: {e}"))?;
    let cached = cache.as_ref().ok_or("auth.certs_not_loaded")?;

    let decoding_key = cached.keys.get(&kid).ok_or("auth.unknown_kid")?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[&config.project_id]);
    validation.set_issuer(&[config.issuer()]);
    validation.validate_exp = true;

    let token_data = decode::<FirebaseClaims>(token, decoding_key, &validation)
        .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    Ok(token_data.claims)
}

fn actor_from_claims(claims: &FirebaseClaims, config: &FirebaseAuthConfig) -> Actor {
    Actor::new(
        UserId::new(claims.sub.as_str()),
        config.is_admin(&claims.sub, claims.admin),
    )
}

/// Firebase Bearer token authentication
///
/// Requests without a valid token are answered with 401 before any
/// handler runs; admin rights are checked later by the use cases.
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    bearer_format = "JWT",
    checker = "firebase_bearer_checker"
)]
pub struct FirebaseBearer(pub Actor);

async fn firebase_bearer_checker(
    req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<Actor> {
    let Some(config) = req.data::<FirebaseAuthConfig>() else {
        tracing::error!("Firebase auth config missing from request data");
        return None;
    };

    if let Err(e) = refresh_certs_if_stale().await {
        tracing::error!("Failed to fetch Google certs: {e}");
        return None;
    }

    match verify_token(&bearer.token, config) {
        Ok(claims) => Some(actor_from_claims(&claims, config)),
        Err(e) => {
            tracing::warn!("Firebase auth failed: {e}");
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::{SystemTime, UNIX_EPOCH};

    use jsonwebtoken::{EncodingKey, encode};
    use serde_json::json;

    use super::*;

    const TEST_KID: &str = "test-signing-key";
    const PRIVATE_PEM: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/testdata/firebase_test_key.pem"
    ));
    const PUBLIC_PEM: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/testdata/firebase_test_key.pub.pem"
    ));

    /// Adds keys to the shared cert cache without dropping ones other
    /// tests rely on, and marks the cache fresh so nothing is fetched.
    pub(crate) fn seed_certs(keys: Vec<(String, DecodingKey)>) {
        let mut cache = CERTS_CACHE.write().unwrap();
        let mut merged = cache.take().map(|c| c.keys).unwrap_or_default();
        merged.extend(keys);
        *cache = Some(CachedCerts {
            keys: merged,
            fetched_at: Instant::now(),
        });
    }

    /// Signs a Firebase-shaped ID token for `project_id` with the test key.
    pub(crate) fn signed_token(project_id: &str, uid: &str, admin: bool) -> String {
        seed_certs(vec![(
            TEST_KID.to_string(),
            DecodingKey::from_rsa_pem(PUBLIC_PEM.as_bytes()).unwrap(),
        )]);

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let claims = json!({
            "sub": uid,
            "iss": format!("https://securetoken.google.com/{project_id}"),
            "aud": project_id,
            "iat": now,
            "exp": now + 3600,
            "admin": admin,
        });
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(TEST_KID.to_string());

        encode(
            &header,
            &claims,
            &EncodingKey::from_rsa_pem(PRIVATE_PEM.as_bytes()).unwrap(),
        )
        .unwrap()
    }
}
