use super::data::{Login, LoginPayload, Register, RegisterPayload};
use crate::config::state::AuthenticationService;
use crate::controllers::http::ApiResponse;
use crate::core::auth::CurrentUser;
use crate::error::Error;
use crate::AppResult;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use validify::Validify;

pub async fn register(
    State(service): State<AuthenticationService>,
    Json(data): Json<RegisterPayload>,
) -> AppResult<impl IntoResponse> {
    let Register {
        name,
        surname,
        email,
        password,
    } = Register::validify(data).map_err(Error::new)?;

    let token = service.register(name, surname, email, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            token,
            "User registered successfully",
        )),
    ))
}

pub async fn login(
    State(service): State<AuthenticationService>,
    Json(data): Json<LoginPayload>,
) -> AppResult<impl IntoResponse> {
    let Login { email, password } = Login::validify(data).map_err(Error::new)?;

    let token = service.login(email, password).await?;

    Ok(Json(ApiResponse::with_message(
        token,
        "User logged in successfully",
    )))
}

pub async fn me(
    State(service): State<AuthenticationService>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<impl IntoResponse> {
    let user = service.current_user(current.id).await?;

    Ok(Json(ApiResponse::with_message(
        user,
        "User retrieved successfully",
    )))
}
