//! Authentication state shared across the component tree.
//!
//! [`AuthStore`] owns the in-memory view of the session (user, tokens, request
//! status) and keeps it in step with [`SessionStorage`]. Components reach it
//! through a `Signal<AuthStore>` context; async operations run against a clone
//! which is written back once the request settles.

use std::{future::Future, rc::Rc};

use dioxus_logger::tracing;

use crate::{
    client::{
        api::AuthApi,
        error::{ApiError, ClientError},
        navigation::{PageNavigator, LOGIN_PATH},
        store::session::{SessionStorage, REFRESH_TOKEN_KEY, TOKEN_KEY, USER_KEY},
    },
    model::{
        auth::{LoginDto, LoginResponseDto, RegisterDto, RegisterResponseDto},
        user::UserDto,
    },
};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed, please check your username and password";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed, please check your input";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserDto>,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    /// A login or registration request is in flight
    pub loading: bool,
    /// Message from the last failed login or registration
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[derive(Clone)]
pub struct AuthStore {
    pub state: AuthState,
    storage: Rc<dyn SessionStorage>,
    navigator: Rc<dyn PageNavigator>,
}

impl AuthStore {
    /// Build the store from whatever session is persisted in `storage`.
    ///
    /// A stored user that fails to parse invalidates the whole session.
    pub fn from_storage(storage: Rc<dyn SessionStorage>, navigator: Rc<dyn PageNavigator>) -> Self {
        let mut store = Self {
            state: AuthState::default(),
            storage,
            navigator,
        };

        let Some(token) = store.storage.get(TOKEN_KEY) else {
            tracing::debug!("No stored session token, user is logged out");
            store.clear_auth();
            return store;
        };

        store.state.token = Some(token);
        store.state.refresh_token = store.storage.get(REFRESH_TOKEN_KEY);

        if let Some(user) = store.storage.get(USER_KEY) {
            match serde_json::from_str::<UserDto>(&user) {
                Ok(user) => store.state.user = Some(user),
                Err(e) => {
                    tracing::warn!("Failed to parse stored user, clearing session: {}", e);
                    store.clear_auth();
                }
            }
        }

        store
    }

    /// Whether a session token is currently persisted.
    ///
    /// Reads storage rather than the in-memory state so the header reflects
    /// what a reload would see.
    pub fn has_session(&self) -> bool {
        self.storage.get(TOKEN_KEY).is_some()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn set_auth(
        &mut self,
        user: Option<UserDto>,
        access: &str,
        refresh: &str,
    ) -> Result<(), ClientError> {
        self.storage.set(TOKEN_KEY, access);
        self.storage.set(REFRESH_TOKEN_KEY, refresh);
        match &user {
            Some(user) => self.storage.set(USER_KEY, &serde_json::to_string(user)?),
            None => self.storage.remove(USER_KEY),
        }

        self.state.user = user;
        self.state.token = Some(access.to_string());
        self.state.refresh_token = Some(refresh.to_string());

        Ok(())
    }

    pub fn clear_auth(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        self.storage.remove(USER_KEY);

        self.state.user = None;
        self.state.token = None;
        self.state.refresh_token = None;
        self.state.error = None;
    }

    /// Clear the session and reload the application at the login page.
    pub fn logout(&mut self) {
        tracing::info!("Logging out");

        self.clear_auth();
        self.navigator.navigate(LOGIN_PATH);
    }

    pub async fn login<A: AuthApi>(
        &mut self,
        api: &A,
        credentials: &LoginDto,
    ) -> Result<LoginResponseDto, ClientError> {
        self.state.loading = true;
        self.state.error = None;

        // A stale token must not survive a failed login attempt
        self.state.token = None;
        self.state.user = None;

        let result = self.try_login(api, credentials).await;

        if let Err(err) = &result {
            tracing::warn!(username = %credentials.username, "Login failed: {}", err);

            self.clear_auth();
            self.state.error = Some(err.user_message(LOGIN_FAILED_MESSAGE));
        } else {
            tracing::info!(username = %credentials.username, "Logged in");
        }

        self.state.loading = false;

        result
    }

    async fn try_login<A: AuthApi>(
        &mut self,
        api: &A,
        credentials: &LoginDto,
    ) -> Result<LoginResponseDto, ClientError> {
        let response = api.login(credentials).await?;

        let (Some(access), Some(refresh)) = (&response.access, &response.refresh) else {
            return Err(ApiError::MalformedResponse.into());
        };

        self.set_auth(response.user.clone(), access, refresh)?;

        Ok(response)
    }

    pub async fn register<A: AuthApi>(
        &mut self,
        api: &A,
        data: &RegisterDto,
    ) -> Result<RegisterResponseDto, ClientError> {
        self.state.loading = true;
        self.state.error = None;

        let result = api.register(data).await.map_err(ClientError::from);

        match &result {
            Ok(_) => tracing::info!(username = %data.username, "Registered new account"),
            Err(err) => {
                tracing::warn!(username = %data.username, "Registration failed: {}", err);
                self.state.error = Some(err.user_message(REGISTER_FAILED_MESSAGE));
            }
        }

        self.state.loading = false;

        result
    }

    /// Refresh the current user from the API.
    ///
    /// An expired access token is refreshed once. Any remaining failure ends
    /// the session and sends the browser to the login page.
    pub async fn load_user<A: AuthApi>(&mut self, api: &A) -> Result<(), ClientError> {
        if !self.is_authenticated() {
            tracing::debug!("Skipping user load, no session token");
            return Ok(());
        }

        let result = self
            .authorized(api, |token| async move { api.current_user(&token).await })
            .await;

        match result {
            Ok(user) => {
                self.storage.set(USER_KEY, &serde_json::to_string(&user)?);
                self.state.user = Some(user);

                Ok(())
            }
            Err(err) => {
                if self.is_authenticated() {
                    tracing::warn!("Failed to load user, logging out: {}", err);
                    self.logout();
                }

                Err(err)
            }
        }
    }

    /// Run an authenticated request with the current access token.
    ///
    /// A `401` response triggers one token refresh followed by one retry with
    /// the new token. When the token cannot be refreshed the user is logged
    /// out and the error returned.
    pub async fn authorized<A, T, F, Fut>(&mut self, api: &A, request: F) -> Result<T, ClientError>
    where
        A: AuthApi,
        F: Fn(String) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let Some(token) = self.state.token.clone() else {
            return Err(ApiError::NotAuthenticated.into());
        };

        match request(token).await {
            Err(err) if err.is_unauthorized() => {
                if self.state.refresh_token.is_none() {
                    tracing::warn!("Access token rejected and no refresh token, logging out");
                    self.logout();

                    return Err(err.into());
                }

                tracing::debug!("Access token rejected, refreshing");
                self.refresh_access_token(api).await?;

                let token = self
                    .state
                    .token
                    .clone()
                    .ok_or(ApiError::MalformedResponse)?;

                Ok(request(token).await?)
            }
            result => Ok(result?),
        }
    }

    /// Exchange the refresh token for a new access token.
    pub async fn refresh_access_token<A: AuthApi>(&mut self, api: &A) -> Result<(), ClientError> {
        let Some(refresh) = self.state.refresh_token.clone() else {
            return Err(ApiError::MissingRefreshToken.into());
        };

        match api.refresh(&refresh).await {
            Ok(response) => {
                self.storage.set(TOKEN_KEY, &response.access);
                self.state.token = Some(response.access);
                tracing::debug!("Refreshed access token");

                Ok(())
            }
            Err(err) => {
                tracing::warn!("Failed to refresh access token, logging out: {}", err);
                self.logout();

                Err(err.into())
            }
        }
    }
}
