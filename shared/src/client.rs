//! Auth API DTOs
//!
//! Request/response types for `/auth/*` and the signed-in user profile.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Role;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Registration request (customer sign-up form)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

/// Login response data
///
/// Some deployments embed the profile, others only return the token; the
/// client fetches the profile by email when `user` is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token", alias = "accessToken")]
    pub token: String,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

/// Signed-in user information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_staff(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_accepts_access_token() {
        let json = r#"{"access_token":"abc.def.ghi"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token, "abc.def.ghi");
        assert!(resp.user.is_none());
    }

    #[test]
    fn test_login_response_with_user() {
        let json = r#"{"token":"t","user":{"_id":"u1","name":"Ana","email":"ana@cine.io","role":"admin"}}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        let user = resp.user.unwrap();
        assert_eq!(user.id, "u1");
        assert!(user.is_admin());
        assert!(user.is_staff());
    }

    #[test]
    fn test_register_request_validation() {
        let ok = RegisterRequest {
            name: "Ana".into(),
            email: "ana@cine.io".into(),
            password: "longenough".into(),
            phone: None,
            date_of_birth: None,
        };
        assert!(ok.validate().is_ok());

        let bad = RegisterRequest {
            name: String::new(),
            email: "not-an-email".into(),
            password: "short".into(),
            ..ok
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_register_request_serializes_camel_case() {
        let req = RegisterRequest {
            name: "Ana".into(),
            email: "ana@cine.io".into(),
            password: "longenough".into(),
            phone: None,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["dateOfBirth"], "1990-05-17");
        assert!(json.get("phone").is_none());
    }
}
