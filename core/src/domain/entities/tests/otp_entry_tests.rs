use super::*;
use std::collections::HashSet;

fn issued_at() -> DateTime<Utc> {
    "2026-03-14T09:00:00Z".parse().unwrap()
}

#[test]
fn test_new_entry() {
    let entry = OtpEntry::new("rider@example.com", "signup-1", issued_at());

    assert_eq!(entry.email, "rider@example.com");
    assert_eq!(entry.verification_id, "signup-1");
    assert_eq!(entry.code.len(), CODE_LENGTH);
    assert_eq!(entry.attempts, 0);
    assert_eq!(entry.storage_key(), "rider@example.com_signup-1");
}

#[test]
fn test_generate_code_range() {
    for _ in 0..500 {
        let code = OtpEntry::generate_code();
        assert_eq!(code.len(), CODE_LENGTH);

        let value: u32 = code.parse().expect("code should be numeric");
        assert!((CODE_MIN..=CODE_MAX).contains(&value));
    }
}

#[test]
fn test_code_uniqueness() {
    let codes: HashSet<String> = (0..100).map(|_| OtpEntry::generate_code()).collect();
    assert!(codes.len() > 1);
}

#[test]
fn test_expiry_boundary() {
    let entry = OtpEntry::new("rider@example.com", "signup-1", issued_at());

    assert!(!entry.is_expired_at(issued_at() + Duration::seconds(100), 100));
    assert!(entry.is_expired_at(issued_at() + Duration::seconds(101), 100));
    assert_eq!(entry.expires_at(100), issued_at() + Duration::seconds(100));
}

#[test]
fn test_check_success() {
    let mut entry = OtpEntry::new("rider@example.com", "signup-1", issued_at());
    let code = entry.code.clone();

    assert_eq!(entry.check(&code, issued_at(), &OtpConfig::default()), Ok(()));
    assert_eq!(entry.attempts, 0);
}

#[test]
fn test_check_mismatch_counts_attempts() {
    let mut entry = OtpEntry::new("rider@example.com", "signup-1", issued_at());
    entry.code = "123456".to_string();
    let policy = OtpConfig::default();

    for expected in 1..=3 {
        assert_eq!(
            entry.check("654321", issued_at(), &policy),
            Err(OtpError::Mismatch { attempts: expected })
        );
    }

    // Even the right code is refused once the limit is reached
    assert_eq!(
        entry.check("123456", issued_at(), &policy),
        Err(OtpError::TooManyAttempts)
    );
    assert_eq!(entry.attempts, 3);
}

#[test]
fn test_check_expired_before_attempt_limit() {
    let mut entry = OtpEntry::new("rider@example.com", "signup-1", issued_at());
    entry.attempts = 3;

    let later = issued_at() + Duration::seconds(101);
    assert_eq!(
        entry.check("000000", later, &OtpConfig::default()),
        Err(OtpError::Expired)
    );
}

#[test]
fn test_serialization() {
    let entry = OtpEntry::new("rider@example.com", "signup-1", issued_at());

    let json = serde_json::to_string(&entry).unwrap();
    let deserialized: OtpEntry = serde_json::from_str(&json).unwrap();

    assert_eq!(entry, deserialized);
}
