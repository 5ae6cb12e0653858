use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// One isolated in-memory SQLite database per test.
///
/// Tests read `db` directly; it is `Some` once [`TestBuilder::build`](crate::builder::TestBuilder::build)
/// has returned.
#[derive(Default)]
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connection to the test database, opened on first use.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        let db = match self.db.take() {
            Some(db) => db,
            None => Database::connect("sqlite::memory:").await?,
        };

        Ok(self.db.insert(db))
    }

    /// Runs the schema statements in order; referenced tables must come first.
    pub async fn create_tables(
        &mut self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}
