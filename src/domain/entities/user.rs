//! User entity and its creation/update inputs.

use chrono::{DateTime, Utc};

/// A registered user.
///
/// Identity and timestamps are assigned by the repository; callers only ever
/// supply the three contact fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: i64,
        username: String,
        email: String,
        phone_number: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            phone_number,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub phone_number: String,
}

/// Partial update of an existing user.
///
/// `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl UserPatch {
    /// Returns true when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.phone_number.is_none()
    }

    /// Applies the patch to `user` in place.
    pub fn apply_to(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(phone_number) = self.phone_number {
            user.phone_number = phone_number;
        }
    }
}
