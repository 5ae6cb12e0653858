//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation and rules such as the one-leader-per-band invariant
//! - **Orchestration**: Coordinating multiple repository calls, email and realtime events
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod band;
pub mod equipment;
pub mod mail;
pub mod realtime;
pub mod rehearsal;
pub mod reminder;
pub mod setlist;
pub mod song;
pub mod user;
