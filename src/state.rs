use std::sync::Arc;

use crate::{config::AppConfig, db::OrmConn};

// `DatabaseConnection` is not `Clone` when SeaORM's `mock` feature is on.
#[derive(Clone)]
pub struct AppState {
    pub orm: Arc<OrmConn>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(orm: OrmConn, config: AppConfig) -> Self {
        Self {
            orm: Arc::new(orm),
            config: Arc::new(config),
        }
    }

    pub fn db(&self) -> &OrmConn {
        &self.orm
    }
}
