//! Redis-backed OTP store
//!
//! Each entry is stored as JSON under `<prefix>:<email>_<verificationId>` with
//! a TTL one second longer than the expiry window, so Redis drops abandoned
//! codes on its own and the store's `sweep` has nothing to do. Expiry is still
//! decided against the injected clock, which keeps the boundary identical to
//! the in-memory store.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use rb_core::domain::entities::OtpEntry;
use rb_core::errors::{DomainResult, OtpError};
use rb_core::services::otp::{Clock, OtpConfig, OtpStore, SystemClock};
use rb_shared::utils::mask_email;

use super::RedisClient;
use crate::InfrastructureError;

/// OTP store shared by every API instance pointing at the same Redis
pub struct RedisOtpStore {
    client: RedisClient,
    key_prefix: String,
    config: OtpConfig,
    clock: Arc<dyn Clock>,
}

impl RedisOtpStore {
    pub fn new(client: RedisClient, key_prefix: impl Into<String>, config: OtpConfig) -> Self {
        Self::with_clock(client, key_prefix, config, Arc::new(SystemClock))
    }

    pub fn with_clock(
        client: RedisClient,
        key_prefix: impl Into<String>,
        config: OtpConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            client,
            key_prefix: key_prefix.into(),
            config,
            clock,
        }
    }

    /// Redis key for an (email, verification id) pair
    pub fn redis_key(&self, email: &str, verification_id: &str) -> String {
        format!("{}:{}", self.key_prefix, OtpEntry::key(email, verification_id))
    }

    fn ttl_seconds(&self) -> u64 {
        self.config.expiry_seconds.max(0) as u64 + 1
    }

    async fn load(&self, key: &str) -> Result<Option<OtpEntry>, InfrastructureError> {
        match self.client.get(key).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl OtpStore for RedisOtpStore {
    async fn issue(&self, email: &str, verification_id: &str) -> DomainResult<OtpEntry> {
        let entry = OtpEntry::new(email, verification_id, self.clock.now());
        let key = self.redis_key(email, verification_id);
        let json = serde_json::to_string(&entry).map_err(InfrastructureError::from)?;

        self.client
            .set_with_expiry(&key, &json, self.ttl_seconds())
            .await?;

        debug!(
            email = %mask_email(email),
            verification_id = verification_id,
            event = "otp_stored",
            "Stored verification code in Redis"
        );

        Ok(entry)
    }

    async fn verify(&self, email: &str, verification_id: &str, code: &str) -> DomainResult<()> {
        let key = self.redis_key(email, verification_id);
        let mut entry = self.load(&key).await?.ok_or(OtpError::NotFound)?;

        let outcome = entry.check(code, self.clock.now(), &self.config);

        match &outcome {
            Err(error) if error.retains_entry() => {
                let json = serde_json::to_string(&entry).map_err(InfrastructureError::from)?;
                if !self.client.set_keep_ttl(&key, &json).await? {
                    warn!(
                        email = %mask_email(email),
                        event = "otp_expired_during_verify",
                        "Verification code expired before the attempt was recorded"
                    );
                }
            }
            _ => {
                self.client.delete(&key).await?;
            }
        }

        outcome.map_err(Into::into)
    }

    async fn sweep(&self) -> DomainResult<usize> {
        Ok(0)
    }

    async fn peek(&self, email: &str, verification_id: &str) -> DomainResult<Option<OtpEntry>> {
        let key = self.redis_key(email, verification_id);
        Ok(self.load(&key).await?)
    }
}
