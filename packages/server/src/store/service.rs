use sea_orm::sea_query::LikeExpr;
use sea_orm::*;
use tracing::info;

use super::StoreError;
use crate::entity::cupcake;
use crate::models::cupcake::{CupcakeFields, ValidationErrors};
use crate::models::shared::escape_like;

/// Data access for the `cupcakes` table.
///
/// The store borrows a connection for the duration of one request. Writes
/// that must observe the existing row (`update`, `delete`) run in their own
/// transaction.
pub struct CupcakeStore<'a, C: ConnectionTrait + TransactionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> CupcakeStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Every cupcake, in insertion order.
    pub async fn list_all(&self) -> Result<Vec<cupcake::Model>, StoreError> {
        let cupcakes = cupcake::Entity::find()
            .order_by_asc(cupcake::Column::Id)
            .all(self.conn)
            .await?;
        Ok(cupcakes)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<cupcake::Model, StoreError> {
        find_cupcake(self.conn, id).await
    }

    /// Persist a new cupcake. The id is assigned by the database.
    pub async fn create(&self, fields: CupcakeFields) -> Result<cupcake::Model, StoreError> {
        let new_cupcake = cupcake::ActiveModel {
            flavor: Set(fields.flavor),
            size: Set(fields.size),
            rating: Set(fields.rating),
            image: Set(fields.image),
            ..Default::default()
        };

        let model = new_cupcake.insert(self.conn).await?;
        info!(id = model.id, flavor = %model.flavor, "Cupcake created");
        Ok(model)
    }

    /// Replace all mutable fields of an existing cupcake.
    ///
    /// `fields` is only consulted once the row is known to exist, so a missing
    /// id is reported as `NotFound` whatever the input looks like.
    pub async fn update<F>(&self, id: i32, fields: F) -> Result<cupcake::Model, StoreError>
    where
        F: FnOnce() -> Result<CupcakeFields, ValidationErrors>,
    {
        let txn = self.conn.begin().await?;

        let existing = find_cupcake(&txn, id).await?;
        let fields = fields()?;
        let mut active: cupcake::ActiveModel = existing.into();
        active.flavor = Set(fields.flavor);
        active.size = Set(fields.size);
        active.rating = Set(fields.rating);
        active.image = Set(fields.image);

        let model = active.update(&txn).await?;
        txn.commit().await?;

        info!(id, "Cupcake updated");
        Ok(model)
    }

    pub async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let txn = self.conn.begin().await?;

        find_cupcake(&txn, id).await?;
        cupcake::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        info!(id, "Cupcake deleted");
        Ok(())
    }

    /// Case-insensitive substring match on flavor. A blank term matches everything.
    ///
    /// Postgres folds case with `ILIKE`. SQLite's `lower()` and `LIKE` only fold
    /// ASCII, so there the match is done on Unicode-lowercased flavors in Rust.
    pub async fn search_by_flavor(&self, term: &str) -> Result<Vec<cupcake::Model>, StoreError> {
        let term = term.trim();
        let select = cupcake::Entity::find().order_by_asc(cupcake::Column::Id);

        if term.is_empty() {
            return Ok(select.all(self.conn).await?);
        }

        let cupcakes = match self.conn.get_database_backend() {
            DbBackend::Postgres => {
                let pattern = LikeExpr::new(format!("%{}%", escape_like(term))).escape('\\');
                select
                    .filter(cupcake::Column::Flavor.ilike(pattern))
                    .all(self.conn)
                    .await?
            }
            _ => {
                let needle = term.to_lowercase();
                let mut cupcakes = select.all(self.conn).await?;
                cupcakes.retain(|c| c.flavor.to_lowercase().contains(&needle));
                cupcakes
            }
        };
        Ok(cupcakes)
    }
}

async fn find_cupcake<C: ConnectionTrait>(db: &C, id: i32) -> Result<cupcake::Model, StoreError> {
    cupcake::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound(id))
}
