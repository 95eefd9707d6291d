use serde::Serialize;

use crate::users::extractors::FormFields;
use crate::users::repo_types::{NewUser, User};

pub const MISSING_FIELDS: &str = "Missing required fields!";
pub const EMAIL_TAKEN: &str = "Email already registered!";
pub const REGISTERED: &str = "User registered successfully!";
pub const REGISTRATION_FAILED: &str = "Registration failed!";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password!";

/// Form body for registration. Absent fields stay `None`; empty strings count as present.
#[derive(Debug, Default)]
pub struct RegisterForm {
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_password: Option<String>,
    pub pet_name: Option<String>,
}

impl From<FormFields> for RegisterForm {
    fn from(mut fields: FormFields) -> Self {
        Self {
            user_name: fields.take("user_name"),
            user_email: fields.take("user_email"),
            user_password: fields.take("user_password"),
            pet_name: fields.take("pet_name"),
        }
    }
}

impl RegisterForm {
    pub fn into_new_user(self) -> Option<NewUser> {
        Some(NewUser {
            name: self.user_name?,
            email: self.user_email?,
            password: self.user_password?,
            pet_name: self.pet_name?,
        })
    }
}

/// Form body for login.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub user_email: Option<String>,
    pub user_password: Option<String>,
}

impl From<FormFields> for LoginForm {
    fn from(mut fields: FormFields) -> Self {
        Self {
            user_email: fields.take("user_email"),
            user_password: fields.take("user_password"),
        }
    }
}

impl LoginForm {
    pub fn into_credentials(self) -> Option<(String, String)> {
        Some((self.user_email?, self.user_password?))
    }
}

/// `{success, message}` or `{success, user}`; failure is in-band, never an HTTP status.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl ApiResponse {
    pub fn ok(message: &'static str) -> Self {
        Self {
            success: true,
            message: Some(message),
            user: None,
        }
    }

    pub fn failure(message: &'static str) -> Self {
        Self {
            success: false,
            message: Some(message),
            user: None,
        }
    }

    pub fn user(user: User) -> Self {
        Self {
            success: true,
            message: None,
            user: Some(user),
        }
    }
}
