//! Declarative test setup.
//!
//! Builder methods only queue work. Everything runs in order during `build()`, so tests
//! read as a list of preconditions.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Chain configuration methods and finish with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_dashboard_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,              // open_ids
    apartments: Vec<(i32, i32)>,     // (floor_number, unit_number)
    fee_categories: Vec<String>,     // names

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    oauth_endpoints: Vec<(String, usize)>, // (open_id, expected_requests)
}

impl TestBuilder {
    /// Creates a builder with no tables, fixtures or mock endpoints.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_dashboard_tables: false,
            users: Vec::new(),
            apartments: Vec::new(),
            fee_categories: Vec::new(),
            mock_builders: Vec::new(),
            oauth_endpoints: Vec::new(),
        }
    }

    /// Creates every table the dashboard uses.
    ///
    /// Tables are created in foreign key order: user, apartment, fee_category, monthly_fee,
    /// payment, notification and building_settings.
    pub fn with_dashboard_tables(mut self) -> Self {
        self.include_dashboard_tables = true;
        self
    }

    /// Creates the table for a single entity.
    ///
    /// Chain multiple calls to add multiple tables, parents before children.
    ///
    /// ```no_run
    /// use strata_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), strata_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Apartment)
    ///     .with_table(Payment)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Inserts a dashboard user with the given provider open ID.
    pub fn with_user(mut self, open_id: impl Into<String>) -> Self {
        self.users.push(open_id.into());
        self
    }

    /// Inserts an apartment at the given floor and unit.
    pub fn with_mock_apartment(mut self, floor_number: i32, unit_number: i32) -> Self {
        self.apartments.push((floor_number, unit_number));
        self
    }

    /// Inserts an active fee category with the given name.
    pub fn with_fee_category(mut self, name: impl Into<String>) -> Self {
        self.fee_categories.push(name.into());
        self
    }

    /// Adds the OAuth token and userinfo endpoints to the mock server.
    ///
    /// The userinfo endpoint identifies the user as `open_id`. Both mocks expect
    /// `expected_requests` calls.
    pub fn with_oauth_endpoints(mut self, open_id: impl Into<String>, expected_requests: usize) -> Self {
        self.oauth_endpoints.push((open_id.into(), expected_requests));
        self
    }

    /// Adds a custom mock endpoint with direct access to the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Creates tables, inserts fixtures, then creates mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_dashboard_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Apartment),
                schema.create_table_from_entity(entity::prelude::FeeCategory),
                schema.create_table_from_entity(entity::prelude::MonthlyFee),
                schema.create_table_from_entity(entity::prelude::Payment),
                schema.create_table_from_entity(entity::prelude::Notification),
                schema.create_table_from_entity(entity::prelude::BuildingSettings),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for open_id in self.users {
            setup.user().insert_mock_user(&open_id).await?;
        }

        for (floor_number, unit_number) in self.apartments {
            setup
                .apartment()
                .insert_mock_apartment(floor_number, unit_number)
                .await?;
        }

        for name in self.fee_categories {
            setup.fee().insert_mock_fee_category(&name).await?;
        }

        // 3. Create mock endpoints, custom ones first so tests can queue an error response
        // ahead of a success on the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (open_id, expected) in self.oauth_endpoints {
            mocks.extend(setup.auth().create_oauth_endpoints(&open_id, expected));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
