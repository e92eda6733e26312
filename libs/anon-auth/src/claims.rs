use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by an anonymous session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Ephemeral subject minted at sign-in.
    pub sub: Uuid,
    pub iss: String,
    /// Issued-at, unix seconds.
    pub iat: i64,
    /// Expiry, unix seconds.
    pub exp: i64,
    /// Always `true`; there is no other kind of session.
    pub anon: bool,
}

impl SessionClaims {
    #[must_use]
    pub fn subject_id(&self) -> Uuid {
        self.sub
    }
}
