//! Health records of the logged in user, cached per kind.
//!
//! Every request goes through [`AuthStore::authorized`] so an expired access
//! token is refreshed transparently.

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::{
    client::{
        api::{AuthApi, RecordsApi},
        error::ClientError,
        store::AuthStore,
    },
    model::records::{
        HealthRecord, MedicalRecordDto, MedicationRecordDto, PhysicalExamDto, VaccinationRecordDto,
    },
};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load records, please try again";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete record, please try again";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordsState {
    pub medical: Vec<MedicalRecordDto>,
    pub medication: Vec<MedicationRecordDto>,
    pub vaccination: Vec<VaccinationRecordDto>,
    pub physical_exams: Vec<PhysicalExamDto>,
    /// A list request is in flight
    pub loading: bool,
    /// Message from the last failed request
    pub error: Option<String>,
}

/// A record type with its own list in [`RecordsState`].
pub trait StoredRecord: HealthRecord + DeserializeOwned + Clone + PartialEq + 'static {
    fn list(state: &RecordsState) -> &Vec<Self>;

    fn list_mut(state: &mut RecordsState) -> &mut Vec<Self>;
}

impl StoredRecord for MedicalRecordDto {
    fn list(state: &RecordsState) -> &Vec<Self> {
        &state.medical
    }

    fn list_mut(state: &mut RecordsState) -> &mut Vec<Self> {
        &mut state.medical
    }
}

impl StoredRecord for MedicationRecordDto {
    fn list(state: &RecordsState) -> &Vec<Self> {
        &state.medication
    }

    fn list_mut(state: &mut RecordsState) -> &mut Vec<Self> {
        &mut state.medication
    }
}

impl StoredRecord for VaccinationRecordDto {
    fn list(state: &RecordsState) -> &Vec<Self> {
        &state.vaccination
    }

    fn list_mut(state: &mut RecordsState) -> &mut Vec<Self> {
        &mut state.vaccination
    }
}

impl StoredRecord for PhysicalExamDto {
    fn list(state: &RecordsState) -> &Vec<Self> {
        &state.physical_exams
    }

    fn list_mut(state: &mut RecordsState) -> &mut Vec<Self> {
        &mut state.physical_exams
    }
}

impl RecordsState {
    pub fn records<T: StoredRecord>(&self) -> &[T] {
        T::list(self)
    }

    /// Replace the cached list of `T` with the API's.
    pub async fn fetch<T, A>(&mut self, auth: &mut AuthStore, api: &A) -> Result<(), ClientError>
    where
        T: StoredRecord,
        A: AuthApi + RecordsApi,
    {
        self.loading = true;
        self.error = None;

        let result = auth
            .authorized(api, |token| async move { api.list_records::<T>(&token).await })
            .await;

        self.loading = false;

        match result {
            Ok(records) => {
                tracing::debug!(kind = ?T::KIND, count = records.len(), "Loaded records");
                *T::list_mut(self) = records;

                Ok(())
            }
            Err(err) => {
                tracing::warn!(kind = ?T::KIND, "Failed to load records: {}", err);
                self.error = Some(err.user_message(LOAD_FAILED_MESSAGE));

                Err(err)
            }
        }
    }

    /// Delete a record and drop it from the cached list.
    pub async fn delete<T, A>(
        &mut self,
        auth: &mut AuthStore,
        api: &A,
        id: i32,
    ) -> Result<(), ClientError>
    where
        T: StoredRecord,
        A: AuthApi + RecordsApi,
    {
        self.error = None;

        let result = auth
            .authorized(api, |token| async move {
                api.delete_record(&token, T::KIND, id).await
            })
            .await;

        match result {
            Ok(()) => {
                tracing::info!(kind = ?T::KIND, id, "Deleted record");
                T::list_mut(self).retain(|record| record.id() != id);

                Ok(())
            }
            Err(err) => {
                tracing::warn!(kind = ?T::KIND, id, "Failed to delete record: {}", err);
                self.error = Some(err.user_message(DELETE_FAILED_MESSAGE));

                Err(err)
            }
        }
    }

    /// Forget all cached records, used when the session ends.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
