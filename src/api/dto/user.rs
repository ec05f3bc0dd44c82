//! DTOs for user endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};
use validator::Validate;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::error::ApiError;

/// Request body for `POST /users`.
///
/// Every field must be a non-empty string. Absent, `null` and non-string
/// values deserialize to `None` so that they are all rejected the same way.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub username: Option<String>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub phone_number: Option<String>,
}

impl CreateUserRequest {
    /// Validates presence of all fields and converts into [`NewUser`].
    ///
    /// # Errors
    ///
    /// Returns the 400 "Missing required fields" error on any violation.
    pub fn into_new_user(self) -> Result<NewUser, ApiError> {
        self.validate()
            .map_err(|_| ApiError::missing_required_fields())?;

        let (Some(username), Some(email), Some(phone_number)) =
            (self.username, self.email, self.phone_number)
        else {
            return Err(ApiError::missing_required_fields());
        };

        Ok(NewUser {
            username,
            email,
            phone_number,
        })
    }
}

/// Request body for `PUT /users/{id}`.
///
/// All fields are optional. Absent, `null` and empty fields leave the stored
/// value unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_patch(self) -> UserPatch {
        let supplied = |value: Option<String>| value.filter(|v| !v.is_empty());

        UserPatch {
            username: supplied(self.username),
            email: supplied(self.email),
            phone_number: supplied(self.phone_number),
        }
    }
}

/// JSON representation of a user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserItem {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserItem {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            phone_number: u.phone_number,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MISSING_REQUIRED_FIELDS;

    fn parse(json: &str) -> CreateUserRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_complete_request_converts() {
        let new_user = parse(
            r#"{"username": "testuser", "email": "test@example.com", "phoneNumber": "1234567890"}"#,
        )
        .into_new_user()
        .unwrap();

        assert_eq!(new_user.username, "testuser");
        assert_eq!(new_user.email, "test@example.com");
        assert_eq!(new_user.phone_number, "1234567890");
    }

    #[test]
    fn test_missing_null_and_empty_are_rejected_alike() {
        let bodies = [
            r#"{"email": "a@b.c", "phoneNumber": "1"}"#,
            r#"{"username": null, "email": "a@b.c", "phoneNumber": "1"}"#,
            r#"{"username": "", "email": "a@b.c", "phoneNumber": "1"}"#,
            r#"{"username": "u", "email": "", "phoneNumber": "1"}"#,
            r#"{"username": "u", "email": "a@b.c"}"#,
            r#"{}"#,
        ];

        for body in bodies {
            let err = parse(body).into_new_user().unwrap_err();
            assert_eq!(err.status(), Some(400), "body: {body}");
            assert_eq!(err.message(), MISSING_REQUIRED_FIELDS, "body: {body}");
        }
    }

    #[test]
    fn test_non_string_values_are_rejected_as_missing() {
        let bodies = [
            r#"{"username": false, "email": "a@b.c", "phoneNumber": "1"}"#,
            r#"{"username": 0, "email": "a@b.c", "phoneNumber": "1"}"#,
            r#"{"username": "u", "email": [], "phoneNumber": "1"}"#,
            r#"{"username": "u", "email": "a@b.c", "phoneNumber": {"n": 1}}"#,
        ];

        for body in bodies {
            let err = parse(body).into_new_user().unwrap_err();
            assert_eq!(err.status(), Some(400), "body: {body}");
            assert_eq!(err.message(), MISSING_REQUIRED_FIELDS, "body: {body}");
        }
    }

    #[test]
    fn test_update_request_drops_empty_fields() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"username": "", "email": null, "phoneNumber": "555"}"#)
                .unwrap();

        let patch = request.into_patch();

        assert!(patch.username.is_none());
        assert!(patch.email.is_none());
        assert_eq!(patch.phone_number.as_deref(), Some("555"));
    }

    #[test]
    fn test_user_item_uses_camel_case() {
        let now = Utc::now();
        let item = UserItem::from(User::new(
            1,
            "u".to_string(),
            "e".to_string(),
            "p".to_string(),
            now,
            now,
        ));

        let value = serde_json::to_value(item).unwrap();
        assert_eq!(value["phoneNumber"], "p");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("phone_number").is_none());
    }
}
