use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::form::AppForm;
use crate::models::cupcake::*;
use crate::state::AppState;
use crate::store::CupcakeStore;

#[utoipa::path(
    get,
    path = "/api/cupcakes",
    tag = "Cupcakes",
    operation_id = "listCupcakes",
    summary = "List all cupcakes",
    description = "Returns every cupcake in insertion order.",
    responses(
        (status = 200, description = "All cupcakes", body = CupcakeListResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn list_cupcakes(
    State(state): State<AppState>,
) -> Result<Json<CupcakeListResponse>, AppError> {
    let cupcakes = CupcakeStore::new(&state.db).list_all().await?;
    Ok(Json(cupcakes.into()))
}

#[utoipa::path(
    get,
    path = "/api/cupcakes/{id}",
    tag = "Cupcakes",
    operation_id = "getCupcake",
    summary = "Get a cupcake by ID",
    params(("id" = i32, Path, description = "Cupcake ID")),
    responses(
        (status = 200, description = "Cupcake details", body = CupcakeEnvelope),
        (status = 404, description = "Cupcake not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_cupcake(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CupcakeEnvelope>, AppError> {
    let model = CupcakeStore::new(&state.db).get_by_id(id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    post,
    path = "/api/cupcakes",
    tag = "Cupcakes",
    operation_id = "createCupcake",
    summary = "Create a new cupcake",
    description = "Accepts a JSON or form-encoded body. `flavor`, `size` and `rating` are required; \
                   a missing `image` falls back to a placeholder.",
    request_body = CupcakePayload,
    responses(
        (status = 201, description = "Cupcake created", body = CupcakeEnvelope),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_cupcake(
    State(state): State<AppState>,
    AppForm(payload): AppForm<CupcakePayload>,
) -> Result<impl IntoResponse, AppError> {
    let fields = validate_cupcake(payload)?;

    let model = CupcakeStore::new(&state.db).create(fields).await?;

    Ok((StatusCode::CREATED, Json(CupcakeEnvelope::from(model))))
}

#[utoipa::path(
    patch,
    path = "/api/cupcakes/{id}",
    tag = "Cupcakes",
    operation_id = "updateCupcake",
    summary = "Update an existing cupcake",
    description = "Replaces `flavor`, `size`, `rating` and `image`. A missing cupcake is reported \
                   before the body is checked; the body is then validated exactly like creation, \
                   so an omitted `image` resets to the placeholder.",
    params(("id" = i32, Path, description = "Cupcake ID")),
    request_body = CupcakePayload,
    responses(
        (status = 200, description = "Cupcake updated", body = CupcakeEnvelope),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Cupcake not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_cupcake(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppForm(payload): AppForm<CupcakePayload>,
) -> Result<Json<CupcakeEnvelope>, AppError> {
    let model = CupcakeStore::new(&state.db)
        .update(id, || validate_cupcake(payload))
        .await?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/api/cupcakes/{id}",
    tag = "Cupcakes",
    operation_id = "deleteCupcake",
    summary = "Delete a cupcake by ID",
    params(("id" = i32, Path, description = "Cupcake ID")),
    responses(
        (status = 200, description = "Cupcake deleted", body = DeletedResponse),
        (status = 404, description = "Cupcake not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_cupcake(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse>, AppError> {
    CupcakeStore::new(&state.db).delete(id).await?;
    Ok(Json(DeletedResponse::new()))
}

#[utoipa::path(
    get,
    path = "/api/cupcakes/search",
    tag = "Cupcakes",
    operation_id = "searchCupcakes",
    summary = "Search cupcakes by flavor",
    description = "Case-insensitive substring match on `flavor`. A missing or empty `term` returns every cupcake.",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching cupcakes, possibly none", body = CupcakeListResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn search_cupcakes(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<CupcakeListResponse>, AppError> {
    let term = query.term.unwrap_or_default();
    let cupcakes = CupcakeStore::new(&state.db)
        .search_by_flavor(&term)
        .await?;
    Ok(Json(cupcakes.into()))
}
