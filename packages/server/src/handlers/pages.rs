use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use tracing::instrument;

use crate::entity::cupcake::DEFAULT_IMAGE;
use crate::error::AppError;
use crate::models::cupcake::{CupcakeListResponse, CupcakeResponse};
use crate::state::AppState;
use crate::store::CupcakeStore;
use crate::views;

/// Listing page, seeded with every cupcake.
#[instrument(skip(state))]
pub async fn index_page(State(state): State<AppState>) -> Response {
    match render_index(&state).await {
        Ok(html) => html.into_response(),
        Err(err) => error_page(&state, err),
    }
}

/// Edit form for one cupcake.
#[instrument(skip(state))]
pub async fn edit_page(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match render_edit(&state, id).await {
        Ok(html) => html.into_response(),
        Err(err) => error_page(&state, err),
    }
}

pub async fn client_script() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        views::CLIENT_SCRIPT,
    )
}

async fn render_index(state: &AppState) -> Result<Html<String>, AppError> {
    let cupcakes = CupcakeStore::new(&state.db).list_all().await?;

    let mut ctx = tera::Context::new();
    ctx.insert("cupcakes", &CupcakeListResponse::from(cupcakes).cupcakes);
    ctx.insert("default_image", DEFAULT_IMAGE);

    Ok(Html(state.templates.render("index.html", &ctx)?))
}

async fn render_edit(state: &AppState, id: i32) -> Result<Html<String>, AppError> {
    let cupcake = CupcakeStore::new(&state.db).get_by_id(id).await?;

    let mut ctx = tera::Context::new();
    ctx.insert("cupcake", &CupcakeResponse::from(cupcake));

    Ok(Html(state.templates.render("edit-cupcake-form.html", &ctx)?))
}

/// Render an `AppError` as an HTML page, keeping its status code.
fn error_page(state: &AppState, err: AppError) -> Response {
    let (status, body) = err.status_and_body();

    let mut ctx = tera::Context::new();
    ctx.insert("status", &status.as_u16());
    ctx.insert("message", &body.message);

    match state.templates.render("error.html", &ctx) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render error page: {:?}", e);
            (status, body.message).into_response()
        }
    }
}
