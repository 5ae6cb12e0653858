use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Band, BandMember, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Band)
///     .with_table(BandMember)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for band membership checks.
    ///
    /// Adds, in dependency order: User, Band, BandMember.
    pub fn with_band_tables(self) -> Self {
        self.with_table(User).with_table(Band).with_table(BandMember)
    }

    /// Adds the tables required for song and setlist operations.
    ///
    /// Adds the band tables followed by Song, Setlist and SetlistSong.
    pub fn with_setlist_tables(self) -> Self {
        self.with_band_tables()
            .with_table(Song)
            .with_table(Setlist)
            .with_table(SetlistSong)
    }

    /// Adds the tables required for rehearsal operations.
    ///
    /// Adds the setlist tables followed by Rehearsal and RehearsalAttendance, since
    /// rehearsals may reference a setlist.
    pub fn with_rehearsal_tables(self) -> Self {
        self.with_setlist_tables()
            .with_table(Rehearsal)
            .with_table(RehearsalAttendance)
    }

    /// Adds every table in the schema.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_all_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_all_tables(self) -> Self {
        self.with_rehearsal_tables().with_table(Equipment)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.create_tables(self.tables).await?;

        Ok(context)
    }
}
