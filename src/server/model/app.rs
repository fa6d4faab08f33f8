use crate::server::model::{auth::AuthClient, db::LazyDatabase};

#[derive(Clone)]
pub struct AppState {
    pub db: LazyDatabase,
    pub auth: AuthClient,
}
