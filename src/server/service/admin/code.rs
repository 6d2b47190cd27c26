//! One-time bootstrap code for creating admin accounts.
//!
//! When the server starts without any admin account it generates a code and logs it.
//! `POST /api/users/register/admin` accepts the code exactly once. The code lives in
//! memory only and expires after fifteen minutes.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for admin codes in seconds.
const ADMIN_CODE_TTL_SECONDS: u64 = 15 * 60;

const CODE_LENGTH: usize = 32;

#[derive(Clone)]
struct AdminCode {
    code: String,
    expires_at: Instant,
}

impl AdminCode {
    fn new(code: String) -> Self {
        Self {
            code,
            expires_at: Instant::now() + Duration::from_secs(ADMIN_CODE_TTL_SECONDS),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Holds the currently active admin bootstrap code, if any.
///
/// Cloning shares the same slot, so the copy in `AppState` and the one used at
/// startup see the same code.
#[derive(Clone, Default)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<AdminCode>>>,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a new random 32-character alphanumeric code, replacing any previous one.
    pub async fn generate(&self) -> String {
        let code = random_code();
        *self.code.write().await = Some(AdminCode::new(code.clone()));
        code
    }

    /// Checks the input against the stored code and consumes it on success.
    ///
    /// # Returns
    /// - `true` - Code matched and was unexpired; it can not be used again
    /// - `false` - Code doesn't match, is expired, or no code exists
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        match code.as_ref() {
            Some(stored) if stored.is_expired() => {
                *code = None;
                false
            }
            Some(stored) if stored.code == input_code => {
                *code = None;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        self.code
            .read()
            .await
            .as_ref()
            .is_some_and(|stored| !stored.is_expired())
    }
}

fn random_code() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
