//! Integration tests for the email verification flow wired the way the
//! binary wires it: trait objects, a shared store and a running sweeper.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::{Duration as ChronoDuration, TimeZone, Utc};
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Mutex;

    use rb_core::errors::{DomainError, OtpError};
    use rb_core::services::otp::{
        EmailServiceTrait, InMemoryOtpStore, ManualClock, OtpConfig, OtpService, OtpStore,
        OtpSweeper,
    };

    // Email service capturing outgoing codes
    #[derive(Default)]
    struct Outbox {
        codes: Mutex<HashMap<String, String>>,
    }

    impl Outbox {
        async fn code_for(&self, email: &str) -> String {
            self.codes.lock().await.get(email).cloned().unwrap()
        }
    }

    #[async_trait]
    impl EmailServiceTrait for Outbox {
        async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
            self.codes
                .lock()
                .await
                .insert(email.to_string(), code.to_string());
            Ok(format!("outbox-{}", email))
        }
    }

    type DynOtpService = OtpService<dyn EmailServiceTrait, dyn OtpStore>;

    fn setup() -> (DynOtpService, Arc<Outbox>, Arc<InMemoryOtpStore>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()));
        let store = Arc::new(InMemoryOtpStore::with_clock(OtpConfig::default(), clock.clone()));
        let outbox = Arc::new(Outbox::default());

        let email_service: Arc<dyn EmailServiceTrait> = outbox.clone();
        let otp_store: Arc<dyn OtpStore> = store.clone();
        let service = OtpService::new(email_service, otp_store, OtpConfig::default());

        (service, outbox, store, clock)
    }

    #[tokio::test]
    async fn test_signup_flow() {
        let (service, outbox, store, _clock) = setup();

        let sent = service.send_code("new.rider@example.com", "signup-1").await.unwrap();
        assert_eq!(sent.message_id, "outbox-new.rider@example.com");

        let code = outbox.code_for("new.rider@example.com").await;
        service
            .verify_code("new.rider@example.com", "signup-1", &code)
            .await
            .unwrap();

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_flows_for_one_address() {
        let (service, _outbox, store, _clock) = setup();

        service.send_code("rider@example.com", "booking-1").await.unwrap();
        service.send_code("rider@example.com", "booking-2").await.unwrap();
        assert_eq!(store.len().await, 2);

        let first = store.peek("rider@example.com", "booking-1").await.unwrap().unwrap();
        service
            .verify_code("rider@example.com", "booking-1", &first.code)
            .await
            .unwrap();

        assert!(store.peek("rider@example.com", "booking-2").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_abandoned_code_is_swept() {
        let (service, outbox, store, clock) = setup();

        service.send_code("rider@example.com", "abandoned").await.unwrap();
        let code = outbox.code_for("rider@example.com").await;
        clock.advance(ChronoDuration::seconds(101));

        let sweeper = OtpSweeper::from_config(store.clone(), store.config());
        assert_eq!(sweeper.run_once().await, 1);

        let result = service.verify_code("rider@example.com", "abandoned", &code).await;
        assert!(matches!(result, Err(DomainError::Otp(OtpError::NotFound))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_lifecycle() {
        let (service, _outbox, store, clock) = setup();
        let config = OtpConfig {
            sweep_interval_seconds: 60,
            ..OtpConfig::default()
        };
        let handle = OtpSweeper::from_config(store.clone(), &config).start();

        service.send_code("rider@example.com", "late").await.unwrap();
        clock.advance(ChronoDuration::seconds(101));

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert!(store.is_empty().await);

        assert!(handle.is_running());
        handle.shutdown().await;
    }
}
