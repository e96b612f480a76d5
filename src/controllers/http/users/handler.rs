use super::data::{CreateUser, CreateUserPayload, UpdateUser, UpdateUserPayload};
use crate::config::state::UsersService;
use crate::controllers::http::ApiResponse;
use crate::error::Error;
use crate::AppResult;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validify::Validify;

pub async fn get_all(State(service): State<UsersService>) -> AppResult<impl IntoResponse> {
    let users = service.get_all().await?;
    Ok(Json(ApiResponse::with_message(
        users,
        "Users retrieved successfully",
    )))
}

pub async fn by_id(
    State(service): State<UsersService>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let user = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::with_message(
        user,
        "User retrieved successfully",
    )))
}

pub async fn create(
    State(service): State<UsersService>,
    Json(data): Json<CreateUserPayload>,
) -> AppResult<impl IntoResponse> {
    let data = CreateUser::validify(data).map_err(Error::new)?;
    let user = service.create(data.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(user, "User created successfully")),
    ))
}

pub async fn update(
    State(service): State<UsersService>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateUserPayload>,
) -> AppResult<impl IntoResponse> {
    let data = UpdateUser::validify(data).map_err(Error::new)?;
    let user = service.update(id, data.into()).await?;
    Ok(Json(ApiResponse::with_message(
        user,
        "User updated successfully",
    )))
}

pub async fn remove(
    State(service): State<UsersService>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::empty("User deleted successfully")))
}
