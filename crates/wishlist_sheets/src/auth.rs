use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use wishlist_logging::{redact, wishlist_debug, wishlist_info};

use crate::types::map_reqwest_error;
use crate::{FailureKind, SheetError};

/// Scopes requested for the service account.
pub const DEFAULT_SCOPES: [&str; 2] = [
    "https://spreadsheets.google.com/feeds",
    "https://www.googleapis.com/auth/drive",
];

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
/// Tokens are refreshed this long before they expire.
const EXPIRY_MARGIN_SECS: i64 = 60;

#[async_trait::async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, SheetError>;
}

/// A fixed bearer token, e.g. one minted out of band.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticToken").field(&redact(&self.0)).finish()
    }
}

#[async_trait::async_trait]
impl TokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String, SheetError> {
        Ok(self.0.clone())
    }
}

/// Fields of a Google service-account JSON key.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type", default)]
    pub key_type: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub private_key_id: String,
    pub private_key: String,
    pub client_email: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub auth_uri: String,
    pub token_uri: String,
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("private_key_id", &redact(&self.private_key_id))
            .field("private_key", &"****")
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: String,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    ASSERTION_LIFETIME_SECS
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: i64,
}

/// OAuth 2.0 JWT-bearer grant for a service account, with the access token cached until near expiry.
pub struct ServiceAccountAuth {
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    scopes: Vec<String>,
    http: reqwest::Client,
    cache: Mutex<Option<CachedToken>>,
    /// Unix seconds; injectable for tests.
    pub now: Arc<dyn Fn() -> i64 + Send + Sync>,
}

impl ServiceAccountAuth {
    pub fn new(key: ServiceAccountKey, request_timeout: Duration) -> Result<Self, SheetError> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|err| SheetError::new(FailureKind::InvalidCredential, err.to_string()))?;
        if key.client_email.is_empty() || key.token_uri.is_empty() {
            return Err(SheetError::new(
                FailureKind::InvalidCredential,
                "client_email and token_uri are required",
            ));
        }
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|err| SheetError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            key,
            encoding_key,
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
            http,
            cache: Mutex::new(None),
            now: Arc::new(|| chrono::Utc::now().timestamp()),
        })
    }

    pub fn client_email(&self) -> &str {
        &self.key.client_email
    }

    fn assertion(&self, issued_at: i64) -> Result<String, SheetError> {
        let mut header = Header::new(Algorithm::RS256);
        if !self.key.private_key_id.is_empty() {
            header.kid = Some(self.key.private_key_id.clone());
        }
        let claims = Claims {
            iss: &self.key.client_email,
            scope: self.scopes.join(" "),
            aud: &self.key.token_uri,
            iat: issued_at,
            exp: issued_at + ASSERTION_LIFETIME_SECS,
        };
        encode(&header, &claims, &self.encoding_key)
            .map_err(|err| SheetError::new(FailureKind::InvalidCredential, err.to_string()))
    }

    async fn exchange(&self, issued_at: i64) -> Result<CachedToken, SheetError> {
        let assertion = self.assertion(issued_at)?;
        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetError::new(
                FailureKind::Auth,
                format!("token endpoint returned {status}: {}", body.trim()),
            ));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|err| SheetError::new(FailureKind::Decode, err.to_string()))?;
        wishlist_info!(
            "Obtained access token for {} ({}), valid {}s",
            self.key.client_email,
            redact(&token.access_token),
            token.expires_in
        );
        Ok(CachedToken {
            token: token.access_token,
            expires_at: issued_at + token.expires_in,
        })
    }
}

#[async_trait::async_trait]
impl TokenProvider for ServiceAccountAuth {
    async fn access_token(&self) -> Result<String, SheetError> {
        let now = (self.now)();
        let mut cache = self.cache.lock().await;
        if let Some(cached) = cache.as_ref() {
            if now < cached.expires_at - EXPIRY_MARGIN_SECS {
                return Ok(cached.token.clone());
            }
            wishlist_debug!("Cached access token expired, refreshing");
        }

        let fresh = self.exchange(now).await?;
        let token = fresh.token.clone();
        *cache = Some(fresh);
        Ok(token)
    }
}
