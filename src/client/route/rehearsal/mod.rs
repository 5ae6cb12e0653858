mod create;
mod detail;
mod edit;
mod form;
mod list;

pub use create::RehearsalCreate;
pub use detail::RehearsalDetail;
pub use edit::RehearsalEdit;
pub use list::RehearsalList;
