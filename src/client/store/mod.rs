pub mod auth;
pub mod records;
pub mod session;

#[cfg(test)]
mod tests;

pub use auth::{AuthState, AuthStore};
pub use records::{RecordsState, StoredRecord};
pub use session::{LocalSessionStorage, MemorySessionStorage, SessionStorage};
