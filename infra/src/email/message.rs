//! Verification email content

use serde::Serialize;

/// A rendered verification email, in the shape the HTTP provider accepts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
}

impl VerificationEmail {
    pub fn new(from: &str, to: &str, subject: &str, code: &str, expiry_seconds: i64) -> Self {
        Self {
            from: from.to_string(),
            to: vec![to.to_string()],
            subject: subject.to_string(),
            text: render_body(code, expiry_seconds),
        }
    }
}

fn render_body(code: &str, expiry_seconds: i64) -> String {
    format!(
        "Your verification code is {}.\n\nIt expires in {} seconds. If you did not request this code, you can ignore this email.",
        code, expiry_seconds
    )
}
