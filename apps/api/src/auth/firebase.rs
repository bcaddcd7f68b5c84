//! Firebase ID token verification with JWKS caching.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{AuthError, IdentityVerifier};

const JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";
const ISSUER_PREFIX: &str = "https://securetoken.google.com/";
const JWKS_CACHE_TTL: Duration = Duration::from_secs(3600);
const CLOCK_SKEW_SECS: u64 = 60;

/// The parts of a Firebase service-account key file this service needs.
#[derive(Debug, Clone, Deserialize)]
pub struct FirebaseCredentials {
    pub project_id: String,
}

impl FirebaseCredentials {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read Firebase key file '{}'", path.display()))?;
        let creds: FirebaseCredentials = serde_json::from_str(&raw)
            .with_context(|| format!("Firebase key file '{}' is not valid", path.display()))?;
        anyhow::ensure!(
            !creds.project_id.trim().is_empty(),
            "Firebase key file '{}' has an empty project_id",
            path.display()
        );
        Ok(creds)
    }
}

struct JwksCache {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Option<Instant>,
}

impl JwksCache {
    fn is_expired(&self) -> bool {
        match self.fetched_at {
            Some(fetched_at) => fetched_at.elapsed() > JWKS_CACHE_TTL,
            None => true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct JwksResponse {
    keys: Vec<Jwk>,
}

#[derive(Debug, Deserialize)]
struct Jwk {
    kid: String,
    kty: String,
    n: String,
    e: String,
}

#[derive(Debug, Deserialize)]
struct FirebaseClaims {
    sub: String,
}

/// Verifies RS256 Firebase ID tokens issued for one project.
pub struct FirebaseVerifier {
    project_id: String,
    jwks_cache: Arc<RwLock<JwksCache>>,
    http_client: reqwest::Client,
}

impl FirebaseVerifier {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            jwks_cache: Arc::new(RwLock::new(JwksCache {
                keys: HashMap::new(),
                fetched_at: None,
            })),
            http_client: reqwest::Client::new(),
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[format!("{ISSUER_PREFIX}{}", self.project_id)]);
        validation.set_required_spec_claims(&["exp", "iat", "aud", "iss", "sub"]);
        validation.leeway = CLOCK_SKEW_SECS;
        validation
    }

    async fn get_key(&self, kid: &str) -> Result<DecodingKey, AuthError> {
        {
            let cache = self.jwks_cache.read().await;
            if !cache.is_expired() {
                if let Some(key) = cache.keys.get(kid) {
                    return Ok(key.clone());
                }
            }
        }

        // Cache miss or expired, refresh
        self.refresh_jwks().await?;

        let cache = self.jwks_cache.read().await;
        cache
            .keys
            .get(kid)
            .cloned()
            .ok_or_else(|| AuthError::UnknownKeyId(kid.to_string()))
    }

    async fn refresh_jwks(&self) -> Result<(), AuthError> {
        let response = self
            .http_client
            .get(JWKS_URL)
            .send()
            .await
            .map_err(|e| AuthError::KeyFetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::KeyFetch(format!("HTTP {}", response.status())));
        }

        let jwks: JwksResponse = response
            .json()
            .await
            .map_err(|e| AuthError::KeyFetch(e.to_string()))?;

        let mut keys = HashMap::new();
        for jwk in jwks.keys.into_iter().filter(|k| k.kty == "RSA") {
            let key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e)
                .map_err(|e| AuthError::KeyFetch(e.to_string()))?;
            keys.insert(jwk.kid, key);
        }
        info!("Refreshed {} Firebase signing keys", keys.len());

        let mut cache = self.jwks_cache.write().await;
        cache.keys = keys;
        cache.fetched_at = Some(Instant::now());
        Ok(())
    }
}

#[async_trait]
impl IdentityVerifier for FirebaseVerifier {
    async fn verify(&self, token: &str) -> Result<String, AuthError> {
        let header = decode_header(token)?;
        let kid = header
            .kid
            .ok_or_else(|| AuthError::InvalidFormat("missing kid in token header".to_string()))?;

        let key = self.get_key(&kid).await?;

        let claims = decode::<FirebaseClaims>(token, &key, &self.validation())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::Jwt(e),
            })?
            .claims;

        if claims.sub.trim().is_empty() {
            return Err(AuthError::InvalidFormat("empty sub claim".to_string()));
        }

        debug!("Verified token for user {}", claims.sub);
        Ok(claims.sub)
    }
}
