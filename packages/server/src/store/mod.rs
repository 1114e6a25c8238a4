mod service;

use sea_orm::DbErr;
use thiserror::Error;

use crate::models::cupcake::ValidationErrors;

pub use service::CupcakeStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Cupcake not found: {0}")]
    NotFound(i32),

    #[error("Invalid cupcake: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}
