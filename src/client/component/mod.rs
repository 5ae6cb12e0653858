pub mod form;
pub mod header;
pub mod layout;
pub mod markdown;
pub mod modal;
pub mod page;
pub mod protected_layout;

pub use header::Header;
pub use layout::Layout;
pub use markdown::Markdown;
pub use modal::ConfirmationModal;
pub use page::Page;
pub use protected_layout::ProtectedLayout;
