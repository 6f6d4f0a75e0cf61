//! Email address utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Pragmatic address check: one @, non-empty local part, dotted domain
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$").unwrap()
});

/// Maximum accepted address length
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Check if an email address is well-formed
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= MAX_EMAIL_LENGTH && EMAIL_REGEX.is_match(email)
}

/// Mask an email address for logs (e.g., j***e@example.com)
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let chars: Vec<char> = local.chars().collect();
            let masked_local = match chars.len() {
                0 => String::from("***"),
                1 | 2 => format!("{}***", chars[0]),
                n => format!("{}***{}", chars[0], chars[n - 1]),
            };
            format!("{}@{}", masked_local, domain)
        }
        None => String::from("***"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("rider@example.com"));
        assert!(is_valid_email("first.last+rides@mail.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("rider"));
        assert!(!is_valid_email("rider@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("rider@example"));
        assert!(!is_valid_email("rider @example.com"));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane@example.com"), "j***e@example.com");
        assert_eq!(mask_email("jo@example.com"), "j***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
