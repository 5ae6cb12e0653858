mod create;
mod detail;
mod edit;
mod list;
mod members;

pub use create::BandCreate;
pub use detail::BandDetail;
pub use edit::BandEdit;
pub use list::BandList;
