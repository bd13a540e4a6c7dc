pub mod api;
pub mod auth;
pub mod records;
pub mod user;
