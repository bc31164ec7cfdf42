use std::fmt;

use thiserror::Error;

/// A client application sharing the identity backend.
///
/// Provisioned outside this service; read-only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantApp {
    pub id: AppId,
    pub name: String,
    pub secret: AppSecret,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(pub i32);

impl From<i32> for AppId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("App secret must not be empty")]
pub struct EmptySecretError;

/// Per-tenant token signing secret.
///
/// Never empty. `Debug` does not print the bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct AppSecret(String);

impl AppSecret {
    pub fn new(secret: String) -> Result<Self, EmptySecretError> {
        if secret.is_empty() {
            return Err(EmptySecretError);
        }
        Ok(Self(secret))
    }

    /// Raw bytes for signing and verification.
    pub fn expose(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for AppSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppSecret(***)")
    }
}
