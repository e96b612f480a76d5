use crate::config::state::{
    AppState, AuthenticationService, CommentLikesService, CommentsService, PostsService,
    UsersService,
};
use crate::controllers::http::middleware::auth::verify_bearer;
use crate::controllers::http::middleware::envelope;
use axum::handler::Handler;
use axum::middleware;
use axum::routing::{delete, get, patch, post};
use axum::Router;

pub fn router(state: &AppState) -> Router {
    Router::new()
        .nest("/auth", auth_router(state))
        .nest("/users", users_router(state))
        .nest("/posts", posts_router(state))
        .nest("/comments", comments_router(state))
        .nest("/comment-likes", comment_likes_router(state))
        .merge(resources_router(state))
        .layer(middleware::from_fn(envelope::stamp_failures))
}

fn auth_router(state: &AppState) -> Router {
    use crate::controllers::http::auth::handler::*;

    let service = AuthenticationService::init(state);
    let keys = state.token_keys.clone();
    let guard = move || middleware::from_fn_with_state(keys.clone(), verify_bearer);

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me).layer(guard()))
        .with_state(service)
}

fn users_router(state: &AppState) -> Router {
    use crate::controllers::http::users::handler::*;

    let service = UsersService::init(state);
    let keys = state.token_keys.clone();
    let guard = move || middleware::from_fn_with_state(keys.clone(), verify_bearer);

    Router::new()
        .route("/", get(get_all.layer(guard())).post(create))
        .route(
            "/:id",
            get(by_id).put(update).delete(remove).layer(guard()),
        )
        .with_state(service)
}

fn posts_router(state: &AppState) -> Router {
    use crate::controllers::http::posts::handler::*;

    let service = PostsService::init(state);
    let keys = state.token_keys.clone();
    let guard = move || middleware::from_fn_with_state(keys.clone(), verify_bearer);

    Router::new()
        .route("/", get(get_all))
        .route("/search", get(search))
        .route("/category/:category", get(by_category))
        .route("/user/:id", get(by_user.layer(guard())))
        .route("/create", post(create.layer(guard())))
        .route(
            "/:slug",
            get(by_slug)
                .put(update.layer(guard()))
                .delete(remove.layer(guard())),
        )
        .with_state(service)
}

fn comments_router(state: &AppState) -> Router {
    use crate::controllers::http::comments::handler::*;

    let service = CommentsService::init(state);
    let keys = state.token_keys.clone();
    let guard = move || middleware::from_fn_with_state(keys.clone(), verify_bearer);

    Router::new()
        .route("/create", post(create.layer(guard())))
        .route("/post/:post_id", get(by_post))
        .route("/post/:post_id/count", get(count_for_post))
        .route("/post/getComments/:post_slug", get(by_post_slug))
        .route("/user/:user_id", get(by_user))
        .route("/comment/update/:id", patch(update.layer(guard())))
        .route("/comment/delete/:id", delete(remove.layer(guard())))
        .with_state(service)
}

fn comment_likes_router(state: &AppState) -> Router {
    use crate::controllers::http::comment_likes::handler::*;

    let service = CommentLikesService::init(state);
    let keys = state.token_keys.clone();
    let guard = move || middleware::from_fn_with_state(keys.clone(), verify_bearer);

    Router::new()
        .route("/", post(create.layer(guard())))
        .route("/:comment_id", delete(remove.layer(guard())))
        .route("/comment/:comment_id", get(by_comment))
        .route("/user/:user_id", get(by_user))
        .route("/check/:comment_id", get(check.layer(guard())))
        .with_state(service)
}

fn resources_router(state: &AppState) -> Router {
    use crate::controllers::http::resources::uploads;

    Router::new()
        .route("/uploads/:filename", get(uploads::serve))
        .with_state(state.uploads.clone())
}
