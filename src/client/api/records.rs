use serde::de::DeserializeOwned;

use crate::{
    client::{api::HttpApi, error::ApiError},
    model::records::{HealthRecord, RecordKind},
};

/// Health record collections of the logged in user.
#[allow(async_fn_in_trait)]
pub trait RecordsApi {
    async fn list_records<T: HealthRecord + DeserializeOwned>(
        &self,
        token: &str,
    ) -> Result<Vec<T>, ApiError>;

    async fn delete_record(&self, token: &str, kind: RecordKind, id: i32) -> Result<(), ApiError>;
}

impl RecordsApi for HttpApi {
    async fn list_records<T: HealthRecord + DeserializeOwned>(
        &self,
        token: &str,
    ) -> Result<Vec<T>, ApiError> {
        self.get_json(T::KIND.path(), Some(token)).await
    }

    async fn delete_record(&self, token: &str, kind: RecordKind, id: i32) -> Result<(), ApiError> {
        self.delete(&kind.item_path(id), token).await
    }
}
