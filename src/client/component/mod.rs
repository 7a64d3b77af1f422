pub mod alert;
pub mod header;
pub mod layout;

pub use alert::ErrorAlert;
pub use header::Header;
pub use layout::Layout;
