use crate::config;
use crate::core::auth::{Authentication, TokenKeys};
use crate::core::comment_likes::CommentLikes;
use crate::core::comments::Comments;
use crate::core::posts::Posts;
use crate::core::users::Users;
use crate::db::adapters::comment::CommentAdapter;
use crate::db::adapters::comment_like::CommentLikeAdapter;
use crate::db::adapters::post::PostAdapter;
use crate::db::adapters::user::UserAdapter;
use crate::db::driver::SeaormDriver;
use crate::services::uploads::FsUploadStore;

#[derive(Debug, Clone)]
pub struct AppState {
    pub repository: SeaormDriver,
    pub token_keys: TokenKeys,
    pub uploads: FsUploadStore,
}

impl AppState {
    pub async fn init() -> Self {
        let url = config::get("DATABASE_URL").expect("DATABASE_URL must be set");
        let repository = SeaormDriver::new(&url).await;

        let secret = config::get("JWT_SECRET").expect("JWT_SECRET must be set");
        let issuer = config::get_or_default("JWT_ISSUER", "inkpost");
        let token_keys = TokenKeys::new(secret.as_bytes(), issuer);

        let uploads = FsUploadStore::new(
            config::get_or_default("UPLOADS_DIR", "uploads"),
            config::get_or_default("PUBLIC_URL", "http://localhost:3000"),
        );

        Self {
            repository,
            token_keys,
            uploads,
        }
    }
}

// Concretise services

pub type AuthenticationService = Authentication<UserAdapter>;

impl AuthenticationService {
    pub fn init(state: &AppState) -> AuthenticationService {
        Authentication::new(
            UserAdapter::new(state.repository.clone()),
            state.token_keys.clone(),
        )
    }
}

pub type UsersService = Users<UserAdapter>;

impl UsersService {
    pub fn init(state: &AppState) -> UsersService {
        Users::new(UserAdapter::new(state.repository.clone()))
    }
}

pub type PostsService = Posts<PostAdapter, FsUploadStore>;

impl PostsService {
    pub fn init(state: &AppState) -> PostsService {
        Posts::new(
            PostAdapter::new(state.repository.clone()),
            state.uploads.clone(),
        )
    }
}

pub type CommentsService = Comments<CommentAdapter, PostAdapter>;

impl CommentsService {
    pub fn init(state: &AppState) -> CommentsService {
        Comments::new(
            CommentAdapter::new(state.repository.clone()),
            PostAdapter::new(state.repository.clone()),
        )
    }
}

pub type CommentLikesService = CommentLikes<CommentLikeAdapter, CommentAdapter>;

impl CommentLikesService {
    pub fn init(state: &AppState) -> CommentLikesService {
        CommentLikes::new(
            CommentLikeAdapter::new(state.repository.clone()),
            CommentAdapter::new(state.repository.clone()),
        )
    }
}
