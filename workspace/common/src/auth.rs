use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signed-in user as cached in client storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl AuthUser {
    pub fn from_email(email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: None,
            email: email.into(),
            role: None,
        }
    }

    /// Name shown in the header; falls back to the email address.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.email)
    }
}

/// Login form; also the request body of `/auth/sign-in-email`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful sign-in response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
}
