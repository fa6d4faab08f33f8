//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test environment holding:
/// - In-memory SQLite database connection
/// - In-memory session
/// - Mock HTTP server standing in for the OAuth provider
/// - Mock endpoints created by the builder, kept alive for assertion
///
/// ```ignore
/// let test = TestBuilder::new().with_dashboard_tables().build().await?;
///
/// let apartment = test.apartment().insert_mock_apartment(1, 1).await?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for authentication flows
    pub session: Session,

    /// Mock HTTP server for OAuth endpoints
    pub(crate) server: ServerGuard,
    /// Mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Creates an empty context with no tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context
    /// - `Err(TestError::DbErr)` - SQLite connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            session,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock OAuth provider, e.g. `http://127.0.0.1:1234`.
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Asserts every mock endpoint was called the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint call count does not match
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
