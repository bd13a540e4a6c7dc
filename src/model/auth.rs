use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    /// Must match `password`, checked again by the API
    pub password_confirm: String,
}

/// Response to a login request.
///
/// The token fields are optional so a response missing either of them can be
/// reported as malformed instead of failing to decode.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LoginResponseDto {
    pub access: Option<String>,
    pub refresh: Option<String>,
    pub user: Option<UserDto>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RegisterResponseDto {
    pub user: Option<UserDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RefreshRequestDto {
    pub refresh: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenRefreshDto {
    pub access: String,
}
