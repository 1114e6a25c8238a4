use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Image used when a cupcake is saved without one.
pub const DEFAULT_IMAGE: &str =
    "https://thestayathomechef.com/wp-content/uploads/2017/12/Most-Amazing-Chocolate-Cupcakes-1-small.jpg";

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cupcakes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub flavor: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub size: String,
    pub rating: f64,
    #[sea_orm(column_type = "Text")]
    pub image: String,
}

impl ActiveModelBehavior for ActiveModel {}
