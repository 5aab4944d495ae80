use base64::{engine::general_purpose::STANDARD, Engine as _};
use zeroize::Zeroizing;

use crate::errors::AuthError;

/// Username/password pair lifted from an `Authorization: Basic` header.
pub struct BasicCredentials {
    pub username: String,
    pub password: Zeroizing<String>,
}

impl BasicCredentials {
    /// Parses a raw header value. Returns `None` for anything that isn't a
    /// well-formed basic credential with both parts present.
    pub fn from_header(value: &str) -> Option<Self> {
        let (scheme, encoded) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = Zeroizing::new(STANDARD.decode(encoded.trim()).ok()?);
        let decoded = std::str::from_utf8(&decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        if username.is_empty() || password.is_empty() {
            return None;
        }

        Some(BasicCredentials {
            username: username.to_string(),
            password: Zeroizing::new(password.to_string()),
        })
    }
}

/// The single static credential pair allowed to write.
pub struct CredentialGate {
    username: Zeroizing<String>,
    password: Zeroizing<String>,
}

impl CredentialGate {
    pub fn new(username: &str, password: &str) -> Self {
        CredentialGate {
            username: Zeroizing::new(username.to_string()),
            password: Zeroizing::new(password.to_string()),
        }
    }

    pub fn authenticate(&self, credentials: Option<&BasicCredentials>) -> Result<(), AuthError> {
        let credentials = credentials.ok_or(AuthError::MissingCredentials)?;

        if credentials.username == *self.username && *credentials.password == *self.password {
            Ok(())
        } else {
            Err(AuthError::WrongCredentials)
        }
    }
}
