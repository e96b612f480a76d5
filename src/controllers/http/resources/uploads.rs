use crate::core::uploads::UploadStorage;
use crate::services::uploads::FsUploadStore;
use crate::AppResult;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;

pub async fn serve(
    State(store): State<FsUploadStore>,
    Path(filename): Path<String>,
) -> AppResult<impl IntoResponse> {
    let (bytes, content_type) = store.load(filename).await.map_err(crate::error::Error::new)?;
    Ok(([(header::CONTENT_TYPE, content_type)], bytes))
}
