use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user profile as returned by `users/me/` and the login response.
///
/// Every field other than the identity is optional in the backend and may be
/// `null` or missing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// One of `A`, `B`, `AB`, `O`; empty when not recorded
    #[serde(default)]
    pub blood_type: Option<String>,
    /// Comma separated list
    #[serde(default)]
    pub hobbies: Option<String>,
    /// `name-relationship-phone`
    #[serde(default)]
    pub emergency_contact: Option<String>,
}

impl UserDto {
    pub fn phone(&self) -> Option<&str> {
        non_blank(&self.phone)
    }

    pub fn blood_type(&self) -> Option<&str> {
        non_blank(&self.blood_type)
    }

    pub fn emergency_contact(&self) -> Option<&str> {
        non_blank(&self.emergency_contact)
    }

    /// Full name when the user entered one, otherwise the username.
    pub fn display_name(&self) -> String {
        let name = [non_blank(&self.first_name), non_blank(&self.last_name)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        if name.is_empty() {
            self.username.clone()
        } else {
            name
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
