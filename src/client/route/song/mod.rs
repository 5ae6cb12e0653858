mod create;
mod edit;
mod form;
mod list;

pub use create::SongCreate;
pub use edit::SongEdit;
pub use list::SongList;
