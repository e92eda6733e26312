use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Anonymous session settings (`auth` section of the server config).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnonAuthConfig {
    /// HMAC secret for session tokens. A random per-process secret is used
    /// when unset, which invalidates every session on restart.
    #[serde(skip_serializing)]
    pub secret: Option<SecretString>,
    /// Session lifetime in humantime notation, e.g. `24h` or `30m`.
    pub ttl: String,
    /// Value of the `iss` claim; tokens from other issuers are rejected.
    pub issuer: String,
}

impl Default for AnonAuthConfig {
    fn default() -> Self {
        Self {
            secret: None,
            ttl: "24h".to_owned(),
            issuer: "baby-shower".to_owned(),
        }
    }
}
