//! Tests for the auth store.


use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::{
    client::{
        api::{AuthApi, RecordsApi},
        error::ApiError,
        navigation::RecordingNavigator,
        store::{AuthStore, MemorySessionStorage},
    },
    model::{
        auth::{LoginDto, LoginResponseDto, RegisterDto, RegisterResponseDto, TokenRefreshDto},
        records::{HealthRecord, RecordKind},
        user::UserDto,
    },
};

pub(super) fn test_user() -> UserDto {
    UserDto {
        id: 1,
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        first_name: Some("Alice".to_string()),
        last_name: None,
        phone: Some("555-0100".to_string()),
        birth_date: None,
        blood_type: Some("O".to_string()),
        hobbies: None,
        emergency_contact: None,
    }
}

pub(super) fn credentials() -> LoginDto {
    LoginDto {
        username: "alice".to_string(),
        password: "hunter2".to_string(),
    }
}

/// Store backed by in-memory storage, returning handles to inspect side effects.
pub(super) fn test_store(
    storage: MemorySessionStorage,
) -> (AuthStore, MemorySessionStorage, RecordingNavigator) {
    let navigator = RecordingNavigator::new();
    let store = AuthStore::from_storage(Rc::new(storage.clone()), Rc::new(navigator.clone()));

    (store, storage, navigator)
}

/// The API's answer to a request made with an expired access token.
pub(super) fn token_expired() -> ApiError {
    ApiError::from_body(
        401,
        r#"{"detail":"Given token not valid for any token type","code":"token_not_valid"}"#,
    )
}

/// Canned responses for each endpoint, recording the tokens it was called with.
///
/// When `accepted_token` is set, authenticated requests carrying any other
/// access token are rejected with [`token_expired`].
#[derive(Default)]
pub(super) struct FakeApi {
    pub login: Option<Result<LoginResponseDto, ApiError>>,
    pub register: Option<Result<RegisterResponseDto, ApiError>>,
    pub current_user: Option<Result<UserDto, ApiError>>,
    pub refresh: Option<Result<TokenRefreshDto, ApiError>>,
    pub accepted_token: Option<String>,
    /// JSON list bodies per record kind
    pub records: HashMap<RecordKind, String>,
    pub delete: Option<Result<(), ApiError>>,
    pub deleted: RefCell<Vec<(RecordKind, i32)>>,
    pub seen_tokens: RefCell<Vec<String>>,
}

impl FakeApi {
    fn check_token(&self, token: &str) -> Result<(), ApiError> {
        self.seen_tokens.borrow_mut().push(token.to_string());

        match &self.accepted_token {
            Some(accepted) if accepted != token => Err(token_expired()),
            _ => Ok(()),
        }
    }
}

fn unexpected<T>() -> Result<T, ApiError> {
    Err(ApiError::RequestFailed("unexpected request".to_string()))
}

impl AuthApi for FakeApi {
    async fn login(&self, _credentials: &LoginDto) -> Result<LoginResponseDto, ApiError> {
        self.login.clone().unwrap_or_else(unexpected)
    }

    async fn register(&self, _data: &RegisterDto) -> Result<RegisterResponseDto, ApiError> {
        self.register.clone().unwrap_or_else(unexpected)
    }

    async fn current_user(&self, token: &str) -> Result<UserDto, ApiError> {
        self.check_token(token)?;
        self.current_user.clone().unwrap_or_else(unexpected)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenRefreshDto, ApiError> {
        self.seen_tokens.borrow_mut().push(refresh_token.to_string());
        self.refresh.clone().unwrap_or_else(unexpected)
    }
}

impl RecordsApi for FakeApi {
    async fn list_records<T: HealthRecord + DeserializeOwned>(
        &self,
        token: &str,
    ) -> Result<Vec<T>, ApiError> {
        self.check_token(token)?;

        match self.records.get(&T::KIND) {
            Some(body) => serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string())),
            None => unexpected(),
        }
    }

    async fn delete_record(&self, token: &str, kind: RecordKind, id: i32) -> Result<(), ApiError> {
        self.check_token(token)?;
        self.deleted.borrow_mut().push((kind, id));
        self.delete.clone().unwrap_or_else(unexpected)
    }
}
