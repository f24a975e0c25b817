use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserRole;

/// Credentials posted as a form to `/auth/jwt/login`
#[derive(Clone, Default, PartialEq, Debug)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }

    /// Field pairs in the order the OAuth2 password form expects
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [("username", self.username.trim()), ("password", &self.password)]
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Body of `POST /auth/register`
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<DateTime<Utc>>,
    pub role: UserRole,
}

impl Default for RegisterRequest {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            birthdate: None,
            role: UserRole::Customer,
        }
    }
}

impl RegisterRequest {
    pub fn is_deliverer(&self) -> bool {
        self.role == UserRole::Deliverer
    }

    pub fn set_deliverer(&mut self, deliverer: bool) {
        self.role = if deliverer {
            UserRole::Deliverer
        } else {
            UserRole::Customer
        };
    }

    /// The account is signed in right after registration with these
    pub fn login_form(&self) -> LoginForm {
        LoginForm {
            username: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Password-change modal state
#[derive(Clone, Default, PartialEq, Debug)]
pub struct PasswordChange {
    pub new_password: String,
    pub new_password_confirm: String,
}

impl PasswordChange {
    pub fn matches(&self) -> bool {
        !self.new_password.is_empty() && self.new_password == self.new_password_confirm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_form_requires_both_fields() {
        let mut form = LoginForm::default();
        assert!(!form.is_complete());
        form.username = "  olena@example.com ".to_string();
        assert!(!form.is_complete());
        form.password = "pw".to_string();
        assert!(form.is_complete());
        assert_eq!(form.form_fields()[0], ("username", "olena@example.com"));
    }

    #[test]
    fn token_response_without_refresh_token() {
        let token: TokenResponse =
            serde_json::from_str(r#"{"access_token":"abc","token_type":"bearer"}"#).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.refresh_token, None);
    }

    #[test]
    fn register_role_switch() {
        let mut request = RegisterRequest::default();
        assert!(!request.is_deliverer());
        request.set_deliverer(true);
        assert_eq!(request.role, UserRole::Deliverer);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["role"], 2);
        assert!(body.get("birthdate").is_none());
    }

    #[test]
    fn password_change_requires_confirmation() {
        let mut change = PasswordChange {
            new_password: "abc".to_string(),
            new_password_confirm: "abd".to_string(),
        };
        assert!(!change.matches());
        change.new_password_confirm = "abc".to_string();
        assert!(change.matches());
        assert!(!PasswordChange::default().matches());
    }
}
