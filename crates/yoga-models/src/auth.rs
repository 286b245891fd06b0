//! Authentication payloads.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::UserId;
use crate::users::User;
use crate::validation::not_blank;

#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "yoga@studio.com")]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(email, length(max = 50), custom(function = "not_blank"))]
    pub email: String,
    #[validate(length(min = 3, max = 20))]
    pub first_name: String,
    #[validate(length(min = 3, max = 20))]
    pub last_name: String,
    #[validate(length(min = 6, max = 40))]
    pub password: String,
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish_non_exhaustive()
    }
}

/// Successful login: the bearer token plus the identity it was issued for.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub id: UserId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}

impl JwtResponse {
    pub fn bearer(token: String, user: &User) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            id: user.id,
            username: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            admin: user.admin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn signup(email: &str, first_name: &str, password: &str) -> SignupRequest {
        serde_json::from_value(json!({
            "email": email,
            "firstName": first_name,
            "lastName": "Doe",
            "password": password
        }))
        .unwrap()
    }

    #[test]
    fn test_signup_validation() {
        assert!(signup("john@doe.com", "John", "password").validate().is_ok());
        assert!(signup("not-an-email", "John", "password").validate().is_err());
        assert!(signup("john@doe.com", "Jo", "password").validate().is_err());
        assert!(signup("john@doe.com", "John", "pass").validate().is_err());
    }

    #[test]
    fn test_login_rejects_blank_fields() {
        let request: LoginRequest =
            serde_json::from_value(json!({ "email": " ", "password": "x" })).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_debug_hides_passwords() {
        let request = signup("john@doe.com", "John", "s3cret-pass");
        assert!(!format!("{:?}", request).contains("s3cret-pass"));
    }

    #[test]
    fn test_jwt_response_wire_format() {
        let response = JwtResponse {
            token: "abc".to_string(),
            token_type: "Bearer".to_string(),
            id: UserId::new(1),
            username: "yoga@studio.com".to_string(),
            first_name: "Admin".to_string(),
            last_name: "Admin".to_string(),
            admin: true,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "Bearer");
        assert_eq!(json["username"], "yoga@studio.com");
        assert_eq!(json["firstName"], "Admin");
        assert_eq!(json["admin"], true);
    }
}
