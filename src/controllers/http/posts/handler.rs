use super::data::{
    CreatePost, CreatePostPayload, GetPostsPaginated, GetPostsPaginatedPayload, SearchQuery,
    UpdatePost, UpdatePostPayload,
};
use crate::config::state::PostsService;
use crate::controllers::http::ApiResponse;
use crate::core::auth::CurrentUser;
use crate::core::uploads::ImageUpload;
use crate::error::Error;
use crate::AppResult;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validify::Validify;

pub async fn get_all(
    State(service): State<PostsService>,
    Query(query): Query<GetPostsPaginatedPayload>,
) -> AppResult<impl IntoResponse> {
    let filter = GetPostsPaginated::validify(query).map_err(Error::new)?;
    let (scope, page) = filter.into_parts();

    let posts = service.get_paginated(scope, page).await?;

    Ok(Json(ApiResponse::paginated(
        posts,
        "Posts retrieved successfully",
    )))
}

pub async fn search(
    State(service): State<PostsService>,
    Query(search): Query<SearchQuery>,
    Query(query): Query<GetPostsPaginatedPayload>,
) -> AppResult<impl IntoResponse> {
    let filter = GetPostsPaginated::validify(query).map_err(Error::new)?;
    let (mut scope, page) = filter.into_parts();
    scope.search = Some(search.query);

    let posts = service.get_paginated(scope, page).await?;

    Ok(Json(ApiResponse::paginated(
        posts,
        "Posts retrieved successfully",
    )))
}

pub async fn by_category(
    State(service): State<PostsService>,
    Path(category): Path<String>,
    Query(query): Query<GetPostsPaginatedPayload>,
) -> AppResult<impl IntoResponse> {
    let filter = GetPostsPaginated::validify(query).map_err(Error::new)?;
    let (mut scope, page) = filter.into_parts();
    scope.category = Some(category);

    let posts = service.get_paginated(scope, page).await?;

    Ok(Json(ApiResponse::paginated(
        posts,
        "Posts retrieved successfully",
    )))
}

pub async fn by_user(
    State(service): State<PostsService>,
    Path(user_id): Path<i32>,
    Query(query): Query<GetPostsPaginatedPayload>,
) -> AppResult<impl IntoResponse> {
    let filter = GetPostsPaginated::validify(query).map_err(Error::new)?;
    let (mut scope, page) = filter.into_parts();
    scope.user_id = Some(user_id);

    let posts = service.get_paginated(scope, page).await?;

    Ok(Json(ApiResponse::paginated(
        posts,
        "Posts retrieved successfully",
    )))
}

pub async fn by_slug(
    State(service): State<PostsService>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let post = service.get_by_slug(&slug).await?;

    Ok(Json(ApiResponse::with_message(
        post,
        "Post retrieved successfully",
    )))
}

pub async fn create(
    State(service): State<PostsService>,
    Extension(user): Extension<CurrentUser>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let (payload, image) = read_form::<CreatePostPayload>(multipart).await?;
    let data = CreatePost::validify(payload).map_err(Error::new)?;

    let post = service
        .create(user.id, data.title, data.content, data.category, image)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(post, "Post created successfully")),
    ))
}

pub async fn update(
    State(service): State<PostsService>,
    Extension(user): Extension<CurrentUser>,
    Path(slug): Path<String>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let (payload, image) = read_form::<UpdatePostPayload>(multipart).await?;
    let data = UpdatePost::validify(payload).map_err(Error::new)?;

    let post = service.update(&user, &slug, data.into(), image).await?;

    Ok(Json(ApiResponse::with_message(
        post,
        "Post updated successfully",
    )))
}

pub async fn remove(
    State(service): State<PostsService>,
    Extension(user): Extension<CurrentUser>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    service.delete(&user, &slug).await?;

    Ok(Json(ApiResponse::empty("Post deleted successfully")))
}

/// Splits a multipart form into its text fields, deserialized as `T`, and
/// the optional `file` field.
async fn read_form<T: DeserializeOwned>(
    mut multipart: Multipart,
) -> AppResult<(T, Option<ImageUpload>)> {
    let mut fields = Map::new();
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };

        if name == "file" {
            let filename = field.file_name().unwrap_or_default().to_string();
            let content = field.bytes().await?.to_vec();
            if !filename.is_empty() && !content.is_empty() {
                image = Some(ImageUpload { filename, content });
            }
        } else {
            fields.insert(name, Value::String(field.text().await?));
        }
    }

    let payload = serde_json::from_value(Value::Object(fields))?;
    Ok((payload, image))
}
