//! Process-local OTP store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use rb_shared::config::OtpConfig;
use rb_shared::utils::mask_email;

use crate::domain::entities::OtpEntry;
use crate::errors::{DomainResult, OtpError};

use super::clock::{Clock, SystemClock};
use super::traits::OtpStore;

/// In-memory store shared by every request handler in the process.
///
/// Expired entries are removed lazily by `verify` and in bulk by `sweep`,
/// which an [`OtpSweeper`](super::OtpSweeper) calls on an interval.
pub struct InMemoryOtpStore {
    entries: RwLock<HashMap<String, OtpEntry>>,
    config: OtpConfig,
    clock: Arc<dyn Clock>,
}

impl InMemoryOtpStore {
    /// Create a store reading the wall clock
    pub fn new(config: OtpConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a store reading time from `clock`
    pub fn with_clock(config: OtpConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            config,
            clock,
        }
    }

    pub fn config(&self) -> &OtpConfig {
        &self.config
    }

    /// Number of outstanding entries, expired or not
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl OtpStore for InMemoryOtpStore {
    async fn issue(&self, email: &str, verification_id: &str) -> DomainResult<OtpEntry> {
        let entry = OtpEntry::new(email, verification_id, self.clock.now());
        let replaced = self
            .entries
            .write()
            .await
            .insert(entry.storage_key(), entry.clone())
            .is_some();

        tracing::debug!(
            email = %mask_email(email),
            verification_id = verification_id,
            replaced = replaced,
            event = "otp_stored",
            "Stored verification code"
        );

        Ok(entry)
    }

    async fn verify(&self, email: &str, verification_id: &str, code: &str) -> DomainResult<()> {
        let key = OtpEntry::key(email, verification_id);
        let now = self.clock.now();
        let mut entries = self.entries.write().await;

        let entry = entries.get_mut(&key).ok_or(OtpError::NotFound)?;
        let outcome = entry.check(code, now, &self.config);

        match &outcome {
            Err(error) if error.retains_entry() => {}
            _ => {
                entries.remove(&key);
            }
        }

        outcome.map_err(Into::into)
    }

    async fn sweep(&self) -> DomainResult<usize> {
        let now = self.clock.now();
        let expiry_seconds = self.config.expiry_seconds;
        let mut entries = self.entries.write().await;

        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now, expiry_seconds));

        Ok(before - entries.len())
    }

    async fn peek(&self, email: &str, verification_id: &str) -> DomainResult<Option<OtpEntry>> {
        let key = OtpEntry::key(email, verification_id);
        Ok(self.entries.read().await.get(&key).cloned())
    }
}
