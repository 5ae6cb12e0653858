mod create;
mod detail;
mod edit;
mod list;

pub use create::SetlistCreate;
pub use detail::SetlistDetail;
pub use edit::SetlistEdit;
pub use list::SetlistList;
