mod session_flow;

use health_frontend::{
    client::{api::AuthApi, error::ApiError},
    model::{
        auth::{LoginDto, LoginResponseDto, RegisterDto, RegisterResponseDto, TokenRefreshDto},
        user::UserDto,
    },
};

pub fn patient() -> UserDto {
    UserDto {
        id: 7,
        username: "bob".to_string(),
        email: "bob@example.com".to_string(),
        first_name: Some("Bob".to_string()),
        last_name: Some("Li".to_string()),
        phone: None,
        birth_date: chrono::NaiveDate::from_ymd_opt(1990, 4, 12),
        blood_type: Some(String::new()),
        hobbies: None,
        emergency_contact: None,
    }
}

/// API that accepts a single username/password pair.
pub struct StubApi;

impl AuthApi for StubApi {
    async fn login(&self, credentials: &LoginDto) -> Result<LoginResponseDto, ApiError> {
        if credentials.username == "bob" && credentials.password == "correct horse" {
            Ok(LoginResponseDto {
                access: Some("access-bob".to_string()),
                refresh: Some("refresh-bob".to_string()),
                user: Some(patient()),
            })
        } else {
            Err(ApiError::from_body(
                401,
                r#"{"detail":"No active account found with the given credentials"}"#,
            ))
        }
    }

    async fn register(&self, _data: &RegisterDto) -> Result<RegisterResponseDto, ApiError> {
        Ok(RegisterResponseDto {
            user: Some(patient()),
        })
    }

    async fn current_user(&self, token: &str) -> Result<UserDto, ApiError> {
        match token {
            "access-bob" => Ok(patient()),
            _ => Err(ApiError::from_body(
                401,
                r#"{"detail":"Given token not valid for any token type","code":"token_not_valid"}"#,
            )),
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenRefreshDto, ApiError> {
        match refresh_token {
            "refresh-bob" => Ok(TokenRefreshDto {
                access: "access-bob".to_string(),
            }),
            _ => Err(ApiError::from_body(
                401,
                r#"{"detail":"Token is invalid or expired","code":"token_not_valid"}"#,
            )),
        }
    }
}
