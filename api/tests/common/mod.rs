//! Test harness shared by the route tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use rb_api::AppState;
use rb_core::services::otp::{EmailServiceTrait, InMemoryOtpStore, ManualClock, OtpConfig, OtpService};
use rb_core::services::pricing::FareCalculator;

/// Email service that remembers the last code sent to each address
#[derive(Default)]
pub struct RecordingEmail {
    codes: Mutex<HashMap<String, String>>,
    fail: bool,
}

impl RecordingEmail {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn last_code(&self, email: &str) -> Option<String> {
        self.codes.lock().unwrap().get(email).cloned()
    }
}

#[async_trait]
impl EmailServiceTrait for RecordingEmail {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if self.fail {
            return Err("provider returned 401: invalid api key".to_string());
        }
        self.codes
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());
        Ok(format!("test-msg-{}", code))
    }
}

pub type TestState = AppState<RecordingEmail, InMemoryOtpStore>;

pub struct Harness {
    pub state: web::Data<TestState>,
    pub email: Arc<RecordingEmail>,
    pub store: Arc<InMemoryOtpStore>,
    pub clock: Arc<ManualClock>,
}

pub fn harness() -> Harness {
    harness_with(RecordingEmail::default())
}

pub fn harness_with(email: RecordingEmail) -> Harness {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    ));
    let config = OtpConfig::default();
    let store = Arc::new(InMemoryOtpStore::with_clock(config.clone(), clock.clone()));
    let email = Arc::new(email);
    let otp_service = Arc::new(OtpService::new(email.clone(), store.clone(), config));
    let state = web::Data::new(AppState::new(otp_service, FareCalculator::default()));

    Harness {
        state,
        email,
        store,
        clock,
    }
}
