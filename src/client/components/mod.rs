pub mod header;
pub mod layout;
pub mod logout;
pub mod page;


pub use header::Header;
pub use layout::Layout;
pub use logout::{on_logout, LogoutButton};
pub use page::Page;
