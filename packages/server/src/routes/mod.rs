use axum::{Router, routing::get};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::cupcake::*;
use crate::handlers::pages;
use crate::state::AppState;

/// JSON API under `/api/cupcakes`, documented in the OpenAPI spec.
pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_cupcakes, create_cupcake))
        .routes(routes!(search_cupcakes))
        .routes(routes!(get_cupcake, update_cupcake, delete_cupcake))
}

/// Server-rendered pages and the script they load.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index_page))
        .route("/edit-cupcake/{id}", get(pages::edit_page))
        .route("/static/cupcakes.js", get(pages::client_script))
}
