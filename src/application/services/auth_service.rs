//! Authentication service for HTTP Basic credentials.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Checks Basic credentials against the single configured account.
///
/// Credentials are never compared directly. Both the configured and the
/// presented values are MACed with HMAC-SHA256 under a random per-process key
/// and checked with a constant-time comparison, so timing does not reveal
/// how much of a guess was correct.
pub struct AuthService {
    key: [u8; 32],
    user_mac: Vec<u8>,
    password_mac: Vec<u8>,
}

impl AuthService {
    /// Creates the service with a key drawn from operating system entropy.
    ///
    /// # Errors
    ///
    /// Returns an error if the system random number generator is unavailable.
    pub fn new(user: &str, password: &str) -> Result<Self, getrandom::Error> {
        let mut key = [0u8; 32];
        getrandom::fill(&mut key)?;

        Ok(Self::with_key(key, user, password))
    }

    /// Creates the service with an explicit MAC key.
    pub fn with_key(key: [u8; 32], user: &str, password: &str) -> Self {
        let user_mac = mac(&key, user.as_bytes());
        let password_mac = mac(&key, password.as_bytes());

        Self {
            key,
            user_mac,
            password_mac,
        }
    }

    /// Verifies a user and optional password taken from an `Authorization` header.
    ///
    /// Both parts are always checked so a wrong user costs the same as a
    /// wrong password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the credentials do not match.
    pub fn authenticate(&self, user: &str, password: Option<&str>) -> Result<(), AppError> {
        let user_ok = self.verify(user.as_bytes(), &self.user_mac);
        let password_ok = self.verify(password.unwrap_or_default().as_bytes(), &self.password_mac);

        if user_ok && password_ok {
            Ok(())
        } else {
            tracing::warn!(user, "rejected basic credentials");
            Err(AppError::unauthorized("unauthorized"))
        }
    }

    fn verify(&self, presented: &[u8], expected: &[u8]) -> bool {
        let Ok(mut mac) = HmacSha256::new_from_slice(&self.key) else {
            return false;
        };
        mac.update(presented);
        mac.verify_slice(expected).is_ok()
    }
}

fn mac(key: &[u8], data: &[u8]) -> Vec<u8> {
    match HmacSha256::new_from_slice(key) {
        Ok(mut mac) => {
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        // HMAC accepts keys of any length.
        Err(_) => Vec::new(),
    }
}
