use super::data::{
    CreateCommentLike, CreateCommentLikePayload, GetLikesPaginated, GetLikesPaginatedPayload,
};
use crate::config::state::CommentLikesService;
use crate::controllers::http::{ApiResponse, DEFAULT_MESSAGE};
use crate::core::auth::CurrentUser;
use crate::error::Error;
use crate::AppResult;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use validify::Validify;

pub async fn create(
    State(service): State<CommentLikesService>,
    Extension(user): Extension<CurrentUser>,
    Json(data): Json<CreateCommentLikePayload>,
) -> AppResult<impl IntoResponse> {
    let data = CreateCommentLike::validify(data).map_err(Error::new)?;

    let like = service
        .create(user.id, data.comment_id, data.is_like.unwrap_or(true))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(like, "Comment liked successfully")),
    ))
}

pub async fn remove(
    State(service): State<CommentLikesService>,
    Extension(user): Extension<CurrentUser>,
    Path(comment_id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    service.remove(user.id, comment_id).await?;

    Ok(Json(ApiResponse::empty("Comment unliked successfully")))
}

pub async fn by_comment(
    State(service): State<CommentLikesService>,
    Path(comment_id): Path<i32>,
    Query(query): Query<GetLikesPaginatedPayload>,
) -> AppResult<impl IntoResponse> {
    let filter = GetLikesPaginated::validify(query).map_err(Error::new)?;

    let likes = service
        .get_for_comment(comment_id, filter.into_query())
        .await?;

    Ok(Json(ApiResponse::paginated(likes, DEFAULT_MESSAGE)))
}

pub async fn by_user(
    State(service): State<CommentLikesService>,
    Path(user_id): Path<i32>,
    Query(query): Query<GetLikesPaginatedPayload>,
) -> AppResult<impl IntoResponse> {
    let filter = GetLikesPaginated::validify(query).map_err(Error::new)?;

    let likes = service.get_for_user(user_id, filter.into_query()).await?;

    Ok(Json(ApiResponse::paginated(likes, DEFAULT_MESSAGE)))
}

pub async fn check(
    State(service): State<CommentLikesService>,
    Extension(user): Extension<CurrentUser>,
    Path(comment_id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let status = service.check(user.id, comment_id).await?;

    Ok(Json(ApiResponse::with_message(
        status,
        "Information about users like returned successfully",
    )))
}
