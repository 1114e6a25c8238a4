use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tera::Tera;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub templates: Arc<Tera>,
    pub config: AppConfig,
}
