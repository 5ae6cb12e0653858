//! Database fixtures for the rehearsal scheduler's tests.
//!
//! [`builder::TestBuilder`] creates an in-memory SQLite database holding only the tables a
//! test asks for, using the presets for the band, setlist and rehearsal schemas or
//! individual entities. [`factory`] inserts rows with sensible defaults so a test only
//! spells out the fields it cares about.
//!
//! ```rust,ignore
//! let test = TestBuilder::new().with_band_tables().build().await?;
//! let db = test.db.as_ref().unwrap();
//!
//! let (leader, band) = factory::helpers::create_band_with_leader(db).await?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
