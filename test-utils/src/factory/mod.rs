//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let (leader, band) = factory::helpers::create_band_with_leader(&db).await?;
//!
//! let song = factory::song::SongFactory::new(&db, band.id)
//!     .title("Superstition")
//!     .tempo(Some(100))
//!     .build()
//!     .await?;
//! ```

pub mod band;
pub mod band_member;
pub mod equipment;
pub mod helpers;
pub mod rehearsal;
pub mod setlist;
pub mod song;
pub mod user;

pub use band::create_band;
pub use band_member::{create_leader, create_member};
pub use equipment::create_equipment;
pub use rehearsal::create_rehearsal;
pub use setlist::create_setlist;
pub use song::create_song;
pub use user::create_user;
