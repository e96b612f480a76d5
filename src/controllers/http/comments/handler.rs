use super::data::{
    CreateComment, CreateCommentPayload, GetCommentsPaginated, GetCommentsPaginatedPayload,
    UpdateComment, UpdateCommentPayload,
};
use crate::config::state::CommentsService;
use crate::controllers::http::ApiResponse;
use crate::core::auth::CurrentUser;
use crate::error::Error;
use crate::AppResult;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde_json::json;
use validify::Validify;

pub async fn create(
    State(service): State<CommentsService>,
    Extension(user): Extension<CurrentUser>,
    Json(data): Json<CreateCommentPayload>,
) -> AppResult<impl IntoResponse> {
    let data = CreateComment::validify(data).map_err(Error::new)?;

    let comment = service
        .create(user.id, data.content, data.post_slug)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            comment,
            "Comment created successfully",
        )),
    ))
}

pub async fn by_post(
    State(service): State<CommentsService>,
    Path(post_id): Path<i32>,
    Query(query): Query<GetCommentsPaginatedPayload>,
) -> AppResult<impl IntoResponse> {
    let filter = GetCommentsPaginated::validify(query).map_err(Error::new)?;
    let (_, page) = filter.into_parts();

    let comments = service.get_for_post(post_id, page).await?;

    Ok(Json(ApiResponse::paginated(
        comments,
        "Comments retrieved successfully",
    )))
}

pub async fn by_post_slug(
    State(service): State<CommentsService>,
    Path(post_slug): Path<String>,
    Query(query): Query<GetCommentsPaginatedPayload>,
) -> AppResult<impl IntoResponse> {
    let filter = GetCommentsPaginated::validify(query).map_err(Error::new)?;
    let (_, page) = filter.into_parts();

    let comments = service.get_for_post_slug(post_slug, page).await?;

    Ok(Json(ApiResponse::paginated(
        comments,
        "Comments retrieved successfully",
    )))
}

pub async fn count_for_post(
    State(service): State<CommentsService>,
    Path(post_id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let count = service.count_for_post(post_id).await?;

    Ok(Json(ApiResponse::with_message(
        json!({ "count": count }),
        "Comment count retrieved successfully",
    )))
}

pub async fn by_user(
    State(service): State<CommentsService>,
    Path(user_id): Path<i32>,
    Query(query): Query<GetCommentsPaginatedPayload>,
) -> AppResult<impl IntoResponse> {
    let filter = GetCommentsPaginated::validify(query).map_err(Error::new)?;
    let (post_id, page) = filter.into_parts();

    let comments = service.get_for_user(user_id, post_id, page).await?;

    Ok(Json(ApiResponse::paginated(
        comments,
        "Comments retrieved successfully",
    )))
}

pub async fn update(
    State(service): State<CommentsService>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateCommentPayload>,
) -> AppResult<impl IntoResponse> {
    let data = UpdateComment::validify(data).map_err(Error::new)?;

    let comment = service.update(&user, id, data.content).await?;

    Ok(Json(ApiResponse::with_message(
        comment,
        "Comment updated successfully",
    )))
}

pub async fn remove(
    State(service): State<CommentsService>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    service.remove(&user, id).await?;

    Ok(Json(ApiResponse::empty("Comment deleted successfully")))
}
