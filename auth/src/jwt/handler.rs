use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::Error as JsonWebTokenError;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::JwtError;

/// JWT handler bound to a single signing secret.
///
/// Each tenant app owns its own secret, so a handler is built per app:
/// a token encoded by one handler fails signature verification in a
/// handler built from any other secret. Uses HS256.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a handler for the given secret.
    ///
    /// # Errors
    /// * `EmptySecret` - The secret has no bytes
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::EmptySecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    /// Sign claims into a compact JWT.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be serialized or signed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify the signature and the `exp` claim, then deserialize the claims.
    ///
    /// # Errors
    /// * `Malformed` - Not a three-part JWT, bad base64 or bad JSON
    /// * `Expired` - `exp` is in the past
    /// * `InvalidSignature` - Signed with a different secret
    /// * `Invalid` - Any other validation failure (missing `exp`, wrong algorithm, ...)
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<T>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(classify)
    }
}

fn classify(error: JsonWebTokenError) -> JwtError {
    match error.kind() {
        ErrorKind::InvalidToken
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => JwtError::Malformed,
        ErrorKind::ExpiredSignature => JwtError::Expired,
        ErrorKind::InvalidSignature => JwtError::InvalidSignature,
        _ => JwtError::Invalid(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestClaims {
        sub: String,
        exp: i64,
    }

    fn claims_expiring_in(seconds: i64) -> TestClaims {
        TestClaims {
            sub: "42".to_string(),
            exp: chrono::Utc::now().timestamp() + seconds,
        }
    }

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(b"tenant-a-secret").unwrap();
        let claims = claims_expiring_in(3600);

        let token = handler.encode(&claims).expect("Failed to encode token");
        let decoded: TestClaims = handler.decode(&token).expect("Failed to decode token");

        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(JwtHandler::new(b""), Err(JwtError::EmptySecret)));
    }

    #[test]
    fn test_decode_with_other_tenant_secret() {
        let tenant_a = JwtHandler::new(b"tenant-a-secret").unwrap();
        let tenant_b = JwtHandler::new(b"tenant-b-secret").unwrap();

        let token = tenant_a.encode(&claims_expiring_in(3600)).unwrap();

        assert_eq!(
            tenant_b.decode::<TestClaims>(&token),
            Err(JwtError::InvalidSignature)
        );
    }

    #[test]
    fn test_decode_malformed_token() {
        let handler = JwtHandler::new(b"tenant-a-secret").unwrap();

        assert_eq!(
            handler.decode::<TestClaims>("not-a-jwt"),
            Err(JwtError::Malformed)
        );
        assert_eq!(
            handler.decode::<TestClaims>("invalid.token.here"),
            Err(JwtError::Malformed)
        );
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(b"tenant-a-secret").unwrap();
        let token = handler.encode(&claims_expiring_in(-3600)).unwrap();

        assert_eq!(handler.decode::<TestClaims>(&token), Err(JwtError::Expired));
    }

    #[test]
    fn test_decode_requires_exp_claim() {
        #[derive(Serialize)]
        struct NoExpiry {
            sub: String,
        }

        let handler = JwtHandler::new(b"tenant-a-secret").unwrap();
        let token = handler
            .encode(&NoExpiry {
                sub: "42".to_string(),
            })
            .unwrap();

        assert!(matches!(
            handler.decode::<TestClaims>(&token),
            Err(JwtError::Invalid(_))
        ));
    }
}
