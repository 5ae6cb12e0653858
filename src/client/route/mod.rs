pub mod band;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod rehearsal;
pub mod reset_password;
pub mod setlist;
pub mod song;

pub use forgot_password::ForgotPassword;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::{Profile, ProfileEdit};
pub use register::Register;
pub use reset_password::ResetPassword;
