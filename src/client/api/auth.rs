use crate::{
    client::{api::HttpApi, error::ApiError},
    model::{
        auth::{
            LoginDto, LoginResponseDto, RefreshRequestDto, RegisterDto, RegisterResponseDto,
            TokenRefreshDto,
        },
        user::UserDto,
    },
};

/// Authentication endpoints of the health records API.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, credentials: &LoginDto) -> Result<LoginResponseDto, ApiError>;

    async fn register(&self, data: &RegisterDto) -> Result<RegisterResponseDto, ApiError>;

    /// Fetch the user the access token belongs to
    async fn current_user(&self, token: &str) -> Result<UserDto, ApiError>;

    async fn refresh(&self, refresh_token: &str) -> Result<TokenRefreshDto, ApiError>;
}

impl AuthApi for HttpApi {
    async fn login(&self, credentials: &LoginDto) -> Result<LoginResponseDto, ApiError> {
        self.post_json("users/login/", credentials).await
    }

    async fn register(&self, data: &RegisterDto) -> Result<RegisterResponseDto, ApiError> {
        self.post_json("users/register/", data).await
    }

    async fn current_user(&self, token: &str) -> Result<UserDto, ApiError> {
        self.get_json("users/me/", Some(token)).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenRefreshDto, ApiError> {
        self.post_json(
            "users/token/refresh/",
            &RefreshRequestDto {
                refresh: refresh_token.to_string(),
            },
        )
        .await
    }
}
