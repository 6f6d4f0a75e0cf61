//! Unit tests for the OTP service

use chrono::Duration;
use std::sync::Arc;

use crate::errors::{DomainError, OtpError};
use crate::services::otp::{InMemoryOtpStore, OtpConfig, OtpService, OtpStore};

use super::mocks::{fixed_clock, wrong_code, FailingOtpStore, MockEmailService};

const EMAIL: &str = "rider@example.com";
const VID: &str = "booking-42";

fn service(
    should_fail: bool,
) -> (
    OtpService<MockEmailService, InMemoryOtpStore>,
    Arc<MockEmailService>,
    Arc<crate::services::otp::ManualClock>,
) {
    let email_service = Arc::new(MockEmailService::new(should_fail));
    let clock = fixed_clock();
    let store = Arc::new(InMemoryOtpStore::with_clock(OtpConfig::default(), clock.clone()));
    let service = OtpService::new(email_service.clone(), store, OtpConfig::default());
    (service, email_service, clock)
}

#[tokio::test]
async fn test_send_code_success() {
    let (service, email_service, _clock) = service(false);

    let result = service.send_code(EMAIL, VID).await.unwrap();
    assert_eq!(result.email, EMAIL);
    assert_eq!(result.verification_id, VID);
    assert!(result.message_id.starts_with("mock-msg-"));

    let stored = service.store().peek(EMAIL, VID).await.unwrap().unwrap();
    assert_eq!(email_service.get_sent_code(EMAIL), Some(stored.code.clone()));
    assert_eq!(result.expires_at, stored.issued_at + Duration::seconds(100));
}

#[tokio::test]
async fn test_send_code_trims_email() {
    let (service, email_service, _clock) = service(false);

    service.send_code("  rider@example.com ", VID).await.unwrap();
    assert!(email_service.get_sent_code(EMAIL).is_some());
    assert!(service.store().peek(EMAIL, VID).await.unwrap().is_some());
}

#[tokio::test]
async fn test_send_code_invalid_email() {
    let (service, email_service, _clock) = service(false);

    match service.send_code("not-an-email", VID).await.unwrap_err() {
        DomainError::Validation { message } => assert!(message.contains("email")),
        other => panic!("Expected validation error, got {:?}", other),
    }
    assert_eq!(email_service.sent_count(), 0);
}

#[tokio::test]
async fn test_send_code_blank_verification_id() {
    let (service, _email_service, _clock) = service(false);

    let result = service.send_code(EMAIL, "   ").await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
    assert!(service.store().peek(EMAIL, "   ").await.unwrap().is_none());
}

#[tokio::test]
async fn test_send_code_email_failure_keeps_entry() {
    let (service, _email_service, _clock) = service(true);

    let result = service.send_code(EMAIL, VID).await;
    assert!(matches!(result, Err(DomainError::EmailDelivery { .. })));

    // Left for the sweeper
    assert!(service.store().peek(EMAIL, VID).await.unwrap().is_some());
}

#[tokio::test]
async fn test_send_code_store_failure() {
    let email_service = Arc::new(MockEmailService::new(false));
    let service = OtpService::new(email_service.clone(), Arc::new(FailingOtpStore), OtpConfig::default());

    let result = service.send_code(EMAIL, VID).await;
    assert!(matches!(result, Err(DomainError::Internal { .. })));
    assert_eq!(email_service.sent_count(), 0);
}

#[tokio::test]
async fn test_verify_code_success() {
    let (service, email_service, _clock) = service(false);

    service.send_code(EMAIL, VID).await.unwrap();
    let code = email_service.get_sent_code(EMAIL).unwrap();

    service.verify_code(EMAIL, VID, &code).await.unwrap();

    let again = service.verify_code(EMAIL, VID, &code).await;
    assert!(matches!(again, Err(DomainError::Otp(OtpError::NotFound))));
}

#[tokio::test]
async fn test_verify_code_rejects_malformed_code_without_attempt() {
    let (service, _email_service, _clock) = service(false);

    service.send_code(EMAIL, VID).await.unwrap();

    for bad in ["12345", "1234567", "12a456", ""] {
        let result = service.verify_code(EMAIL, VID, bad).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })), "{:?}", bad);
    }

    let stored = service.store().peek(EMAIL, VID).await.unwrap().unwrap();
    assert_eq!(stored.attempts, 0);
}

#[tokio::test]
async fn test_verify_code_mismatch_then_lockout() {
    let (service, email_service, _clock) = service(false);

    service.send_code(EMAIL, VID).await.unwrap();
    let code = email_service.get_sent_code(EMAIL).unwrap();
    let wrong = wrong_code(&code);

    for attempts in 1..=3 {
        let result = service.verify_code(EMAIL, VID, &wrong).await;
        match result {
            Err(DomainError::Otp(OtpError::Mismatch { attempts: n })) => assert_eq!(n, attempts),
            other => panic!("Expected mismatch, got {:?}", other),
        }
    }

    let result = service.verify_code(EMAIL, VID, &code).await;
    assert!(matches!(result, Err(DomainError::Otp(OtpError::TooManyAttempts))));
}

#[tokio::test]
async fn test_verify_code_expired() {
    let (service, email_service, clock) = service(false);

    service.send_code(EMAIL, VID).await.unwrap();
    let code = email_service.get_sent_code(EMAIL).unwrap();
    clock.advance(Duration::seconds(101));

    let result = service.verify_code(EMAIL, VID, &code).await;
    assert!(matches!(result, Err(DomainError::Otp(OtpError::Expired))));
}

#[tokio::test]
async fn test_resend_invalidates_previous_code() {
    let (service, email_service, _clock) = service(false);

    service.send_code(EMAIL, VID).await.unwrap();
    let first = email_service.get_sent_code(EMAIL).unwrap();

    // Loop until the new code differs so the old one is provably stale
    let mut second = first.clone();
    while second == first {
        service.send_code(EMAIL, VID).await.unwrap();
        second = email_service.get_sent_code(EMAIL).unwrap();
    }

    let stale = service.verify_code(EMAIL, VID, &first).await;
    assert!(matches!(stale, Err(DomainError::Otp(OtpError::Mismatch { attempts: 1 }))));
    service.verify_code(EMAIL, VID, &second).await.unwrap();
}
