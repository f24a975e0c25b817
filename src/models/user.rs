use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role, serialized as the backend's integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum UserRole {
    Customer,
    Deliverer,
    Admin,
}

impl From<UserRole> for u8 {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Customer => 1,
            UserRole::Deliverer => 2,
            UserRole::Admin => 3,
        }
    }
}

impl TryFrom<u8> for UserRole {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(UserRole::Customer),
            2 => Ok(UserRole::Deliverer),
            3 => Ok(UserRole::Admin),
            other => Err(format!("unknown user role {}", other)),
        }
    }
}

impl UserRole {
    /// i18n key for the role name
    pub fn label_key(&self) -> &'static str {
        match self {
            UserRole::Customer => "role_customer",
            UserRole::Deliverer => "role_deliverer",
            UserRole::Admin => "role_admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birthdate: Option<DateTime<Utc>>,
    pub role: UserRole,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// `YYYY-MM-DD`, the format of `<input type="date">`
    pub fn birthdate_input_value(&self) -> String {
        self.birthdate
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// Partial update for `PATCH /users/me`; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<DateTime<Utc>>,
}

impl UserUpdate {
    /// Profile form save: every editable field of the user
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: Some(user.first_name.clone()),
            last_name: Some(user.last_name.clone()),
            email: Some(user.email.clone()),
            password: None,
            role: Some(user.role),
            birthdate: user.birthdate,
        }
    }

    pub fn password(password: String) -> Self {
        Self {
            password: Some(password),
            ..Self::default()
        }
    }
}

/// Parses the value of a date input into a UTC midnight timestamp
pub fn parse_birthdate(value: &str) -> Option<DateTime<Utc>> {
    let date = chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_uses_backend_integer_codes() {
        assert_eq!(serde_json::to_string(&UserRole::Deliverer).unwrap(), "2");
        let role: UserRole = serde_json::from_str("3").unwrap();
        assert_eq!(role, UserRole::Admin);
        assert!(serde_json::from_str::<UserRole>("9").is_err());
    }

    #[test]
    fn user_deserializes_from_backend_payload() {
        let json = r#"{
            "id": "4f7c",
            "email": "olena@example.com",
            "is_active": true,
            "is_superuser": false,
            "is_verified": false,
            "first_name": "Olena",
            "last_name": "Koval",
            "role": 1,
            "birthdate": "1990-04-12T00:00:00Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::Customer);
        assert_eq!(user.full_name(), "Olena Koval");
        assert_eq!(user.birthdate_input_value(), "1990-04-12");
    }

    #[test]
    fn password_update_only_sends_password() {
        let body = serde_json::to_value(UserUpdate::password("s3cret".to_string())).unwrap();
        assert_eq!(body, serde_json::json!({ "password": "s3cret" }));
    }

    #[test]
    fn birthdate_input_round_trips() {
        let parsed = parse_birthdate("2001-02-03").unwrap();
        assert_eq!(parsed.format("%Y-%m-%d").to_string(), "2001-02-03");
        assert!(parse_birthdate("").is_none());
        assert!(parse_birthdate("03/02/2001").is_none());
    }
}
