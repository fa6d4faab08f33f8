//! Database handle and model type aliases.
//!
//! The database connection is established on first use rather than at startup, so the
//! dashboard keeps serving (with empty reads) while the database is unreachable. A failed
//! connection attempt is retried on the next request.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use crate::server::{error::Error, startup};

/// Type alias for the dashboard user database model.
pub type UserModel = entity::user::Model;

/// Type alias for the apartment database model.
pub type ApartmentModel = entity::apartment::Model;

/// Type alias for the fee category database model.
pub type FeeCategoryModel = entity::fee_category::Model;

/// Type alias for the monthly fee database model.
pub type MonthlyFeeModel = entity::monthly_fee::Model;

/// Type alias for the payment database model.
pub type PaymentModel = entity::payment::Model;

/// Type alias for the notification database model.
pub type NotificationModel = entity::notification::Model;

/// Type alias for the building settings database model.
pub type BuildingSettingsModel = entity::building_settings::Model;

/// Lazily initialized, cheaply cloneable database handle.
#[derive(Clone)]
pub struct LazyDatabase {
    url: Option<String>,
    conn: Arc<OnceCell<DatabaseConnection>>,
}

impl LazyDatabase {
    /// Creates a handle that connects to `url` on first use.
    ///
    /// Without a URL the database is permanently unavailable.
    pub fn new(url: Option<String>) -> Self {
        Self {
            url,
            conn: Arc::new(OnceCell::new()),
        }
    }

    /// Wraps an already established connection.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            url: None,
            conn: Arc::new(OnceCell::new_with(Some(db))),
        }
    }

    /// Returns the connection, connecting and running migrations on first use.
    ///
    /// # Returns
    /// - `Some(DatabaseConnection)` - Connected database
    /// - `None` - No database configured or the connection attempt failed (logged)
    pub async fn connection(&self) -> Option<DatabaseConnection> {
        if let Some(db) = self.conn.get() {
            return Some(db.clone());
        }

        let url = self.url.as_deref()?;

        match self
            .conn
            .get_or_try_init(|| startup::connect_to_database(url))
            .await
        {
            Ok(db) => Some(db.clone()),
            Err(err) => {
                tracing::warn!("Failed to connect to database: {}", err);

                None
            }
        }
    }

    /// Returns the connection for a write, failing when the database is unavailable.
    ///
    /// # Returns
    /// - `Ok(DatabaseConnection)` - Connected database
    /// - `Err(Error::DatabaseUnavailable)` - No database configured or connection failed
    pub async fn require(&self) -> Result<DatabaseConnection, Error> {
        self.connection().await.ok_or(Error::DatabaseUnavailable)
    }
}
