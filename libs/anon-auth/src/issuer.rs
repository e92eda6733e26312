use std::time::Duration;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::Rng;
use secrecy::ExposeSecret;
use time::OffsetDateTime;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::claims::SessionClaims;
use crate::config::AnonAuthConfig;
use crate::errors::AuthError;

const MIN_SECRET_LEN: usize = 16;

/// A freshly established anonymous session.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub subject_id: Uuid,
    pub expires_at: OffsetDateTime,
}

/// Mints and validates anonymous session tokens.
pub struct AnonymousIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
    issuer: String,
}

impl AnonymousIssuer {
    /// Build an issuer from the `auth` config section.
    ///
    /// # Errors
    /// Returns [`AuthError::Config`] if the ttl does not parse or the secret is
    /// shorter than 16 bytes.
    pub fn from_config(cfg: &AnonAuthConfig) -> Result<Self, AuthError> {
        let ttl = humantime::parse_duration(&cfg.ttl)
            .map_err(|e| AuthError::Config(format!("invalid ttl '{}': {e}", cfg.ttl)))?;

        let secret = if let Some(secret) = &cfg.secret {
            Zeroizing::new(secret.expose_secret().as_bytes().to_vec())
        } else {
            tracing::warn!("No auth secret configured; sessions will not survive a restart");
            let mut bytes = Zeroizing::new(vec![0u8; 32]);
            rand::rng().fill(bytes.as_mut_slice());
            bytes
        };

        if secret.len() < MIN_SECRET_LEN {
            return Err(AuthError::Config(format!(
                "secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }

        Ok(Self::new(&secret, ttl, cfg.issuer.clone()))
    }

    #[must_use]
    pub fn new(secret: &[u8], ttl: Duration, issuer: impl Into<String>) -> Self {
        let issuer = issuer.into();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
            issuer,
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Establish a new anonymous identity.
    ///
    /// # Errors
    /// Returns [`AuthError::Signing`] if the token cannot be encoded.
    pub fn sign_in_anonymously(&self) -> Result<IssuedSession, AuthError> {
        let now = OffsetDateTime::now_utc();
        let expires_at = now + self.ttl;
        let claims = SessionClaims {
            sub: Uuid::new_v4(),
            iss: self.issuer.clone(),
            iat: now.unix_timestamp(),
            exp: expires_at.unix_timestamp(),
            anon: true,
        };

        let token = self.sign(&claims)?;
        tracing::debug!(subject = %claims.sub, "Issued anonymous session");

        Ok(IssuedSession {
            token,
            subject_id: claims.sub,
            expires_at,
        })
    }

    /// Encode arbitrary claims with this issuer's key.
    ///
    /// # Errors
    /// Returns [`AuthError::Signing`] if encoding fails.
    pub fn sign(&self, claims: &SessionClaims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Check signature, issuer and expiry of a bearer token.
    ///
    /// # Errors
    /// Returns [`AuthError::Expired`] for expired tokens and
    /// [`AuthError::InvalidToken`] for anything else that fails validation.
    pub fn validate(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let data = decode::<SessionClaims>(token, &self.decoding, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken(e.to_string()),
            },
        )?;

        if !data.claims.anon {
            return Err(AuthError::InvalidToken("not an anonymous session".to_owned()));
        }

        Ok(data.claims)
    }
}
