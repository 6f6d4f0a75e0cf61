use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use rb_shared::utils::is_valid_otp_code;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendCodeRequest {
    /// Address to send the code to
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// Client-chosen id for this verification flow
    #[validate(length(min = 1, max = 128, message = "verificationId must be 1-128 characters"))]
    pub verification_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// 6-digit verification code
    #[validate(custom = "validate_code_format")]
    pub code: String,

    #[validate(length(min = 1, max = 128, message = "verificationId must be 1-128 characters"))]
    pub verification_id: String,
}

fn validate_code_format(code: &str) -> Result<(), ValidationError> {
    if is_valid_otp_code(code) {
        Ok(())
    } else {
        let mut error = ValidationError::new("code_format");
        error.message = Some("Verification code must be 6 digits".into());
        Err(error)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResponse {
    pub success: bool,
    pub message: String,
}

impl SendCodeResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: "Verification code sent".to_string(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub success: bool,

    /// User-facing reason the code was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Machine-readable reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl VerifyCodeResponse {
    pub fn verified() -> Self {
        Self {
            success: true,
            error: None,
            code: None,
        }
    }

    pub fn rejected(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            code: Some(code.into()),
        }
    }
}
