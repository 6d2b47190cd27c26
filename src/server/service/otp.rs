//! Phone verification codes.
//!
//! Codes are six digits, valid for five minutes and consumed on successful
//! verification. Requesting a new code for the same phone replaces the old one.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use rand::Rng;
use tokio::sync::RwLock;

const OTP_TTL: Duration = Duration::from_secs(5 * 60);

struct PendingOtp {
    code: String,
    expires_at: Instant,
}

#[derive(Clone, Default)]
pub struct OtpService {
    pending: Arc<RwLock<HashMap<String, PendingOtp>>>,
}

impl OtpService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates and stores a fresh code for the phone number.
    pub async fn issue(&self, phone: &str) -> String {
        let code = format!("{:06}", rand::rng().random_range(0..1_000_000u32));
        let mut pending = self.pending.write().await;

        pending.retain(|_, otp| otp.expires_at > Instant::now());
        pending.insert(
            phone.to_string(),
            PendingOtp {
                code: code.clone(),
                expires_at: Instant::now() + OTP_TTL,
            },
        );

        code
    }

    /// Returns whether the code matches the pending one for the phone.
    ///
    /// A matching code is removed. Expired codes are removed and never match.
    pub async fn verify(&self, phone: &str, code: &str) -> bool {
        let mut pending = self.pending.write().await;

        let Some(otp) = pending.get(phone) else {
            return false;
        };

        if otp.expires_at <= Instant::now() {
            pending.remove(phone);
            return false;
        }

        if otp.code != code {
            return false;
        }

        pending.remove(phone);
        true
    }

    #[cfg(test)]
    async fn expire(&self, phone: &str) {
        if let Some(otp) = self.pending.write().await.get_mut(phone) {
            otp.expires_at = Instant::now();
        }
    }
}
