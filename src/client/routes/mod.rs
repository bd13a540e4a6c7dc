pub mod health;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod records;
pub mod register;

pub use health::Health;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::Profile;
pub use register::Register;
