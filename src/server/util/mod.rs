//! Small helpers shared across services: token issuing, password hashing and
//! request validation.

pub mod jwt;
pub mod password;
pub mod validate;
