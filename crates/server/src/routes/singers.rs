use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use common::types::Success;
use service::singer::{CreateSingerInput, SingerIdQuery, SingerNames, UpdateFirstNameInput};

use crate::errors::ApiError;
use crate::state::AppState;

#[utoipa::path(
    post, path = "/add", tag = "singers",
    request_body = crate::openapi::CreateSingerRequest,
    responses(
        (status = 200, description = "Created", body = crate::openapi::SuccessResponse),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse),
        (status = 409, description = "Singer already exists", body = crate::openapi::ErrorResponse),
        (status = 502, description = "Database unavailable", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn add(
    State(state): State<AppState>,
    payload: Result<Json<CreateSingerInput>, JsonRejection>,
) -> Result<Json<Success>, ApiError> {
    let Json(input) = payload?;
    state.singers.create(input).await?;
    Ok(Json(Success::ok()))
}

#[utoipa::path(
    get, path = "/get-singer", tag = "singers",
    params(("singer_id" = i64, Query, description = "Singer primary key")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::SingerResponse),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse),
        (status = 502, description = "Database unavailable", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get_singer(
    State(state): State<AppState>,
    query: Result<Query<SingerIdQuery>, QueryRejection>,
) -> Result<Json<SingerNames>, ApiError> {
    let Query(q) = query?;
    let names = state.singers.get(q.singer_id.as_deref()).await?;
    Ok(Json(names))
}

#[utoipa::path(
    put, path = "/update-first-name", tag = "singers",
    params(("singer_id" = i64, Query, description = "Singer primary key")),
    request_body = crate::openapi::UpdateFirstNameRequest,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::SuccessResponse),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse),
        (status = 502, description = "Database unavailable", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update_first_name(
    State(state): State<AppState>,
    query: Result<Query<SingerIdQuery>, QueryRejection>,
    payload: Result<Json<UpdateFirstNameInput>, JsonRejection>,
) -> Result<Json<Success>, ApiError> {
    let Query(q) = query?;
    let Json(input) = payload?;
    state.singers.update_first_name(q.singer_id.as_deref(), input).await?;
    Ok(Json(Success::ok()))
}

#[utoipa::path(
    delete, path = "/delete-singer", tag = "singers",
    params(("singer_id" = i64, Query, description = "Singer primary key")),
    responses(
        (
            status = 200, description = "Deleted or already absent",
            body = crate::openapi::SuccessResponse
        ),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse),
        (status = 502, description = "Database unavailable", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete_singer(
    State(state): State<AppState>,
    query: Result<Query<SingerIdQuery>, QueryRejection>,
) -> Result<Json<Success>, ApiError> {
    let Query(q) = query?;
    state.singers.delete(q.singer_id.as_deref()).await?;
    Ok(Json(Success::ok()))
}
