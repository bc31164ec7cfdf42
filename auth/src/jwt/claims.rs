use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Payload of a session token.
///
/// Carries the user identity and the tenant app the token was issued for.
/// `exp` is the embedded expiry checked by [`super::JwtHandler::decode`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// User id
    pub uid: i64,

    /// User email at issue time
    pub email: String,

    /// Tenant app id
    pub app_id: i32,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Random token id; two tokens issued in the same second still differ
    pub jti: String,
}

impl SessionClaims {
    /// Claims issued now and expiring after `validity`.
    pub fn new(uid: i64, email: impl Into<String>, app_id: i32, validity: Duration) -> Self {
        let now = Utc::now();

        Self {
            uid,
            email: email.into(),
            app_id,
            iat: now.timestamp(),
            exp: (now + validity).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Check if the embedded expiry has passed.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_expiry_from_validity() {
        let claims = SessionClaims::new(7, "a@x.com", 1, Duration::minutes(30));

        assert_eq!(claims.uid, 7);
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.app_id, 1);
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_new_generates_unique_ids() {
        let first = SessionClaims::new(7, "a@x.com", 1, Duration::minutes(30));
        let second = SessionClaims::new(7, "a@x.com", 1, Duration::minutes(30));

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_is_expired() {
        let mut claims = SessionClaims::new(7, "a@x.com", 1, Duration::zero());
        claims.exp = 1000;

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
