use actix_web::{get, post, web, HttpResponse, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    post::application::{
        domain::entities::PostId,
        ports::incoming::use_cases::{LikePostError, ListLikersError},
    },
    shared::api::ApiResponse,
    user::{
        adapter::incoming::web::routes::invalid_user_id,
        application::domain::entities::{UserId, UserSummary},
    },
    AppState,
};

use super::{invalid_post_id, LimitQuery};

#[utoipa::path(
    post,
    path = "/api/v1/posts/{id}/likes/{user_id}",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post id (UUID)"),
        ("user_id" = String, Path, description = "Id of the liking user (UUID)")
    ),
    responses(
        (status = 204, description = "Like recorded"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Post or user not found", body = ErrorResponse),
        (status = 409, description = "User already liked this post", body = ErrorResponse)
    )
)]
#[post("/api/v1/posts/{id}/likes/{user_id}")]
pub async fn like_post_handler(
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (raw_post, raw_user) = path.into_inner();

    let post = match PostId::parse(&raw_post) {
        Ok(id) => id,
        Err(_) => return invalid_post_id(),
    };
    let user = match UserId::parse(&raw_user) {
        Ok(id) => id,
        Err(_) => return invalid_user_id(),
    };

    match data.post.like.execute(post, user).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_like_post_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}/liked-by",
    tag = "posts",
    params(("id" = String, Path, description = "Post id (UUID)"), LimitQuery),
    responses(
        (status = 200, description = "Active users who liked the post (at most 50)", body = inline(SuccessResponse<Vec<UserSummary>>)),
        (status = 400, description = "Malformed id", body = ErrorResponse)
    )
)]
#[get("/api/v1/posts/{id}/liked-by")]
pub async fn list_likers_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LimitQuery>,
) -> impl Responder {
    let post = match PostId::parse(&path) {
        Ok(id) => id,
        Err(_) => return invalid_post_id(),
    };

    match data.post.likers.execute(post, query.limit).await {
        Ok(users) => ApiResponse::success(users),
        Err(ListLikersError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}

fn map_like_post_error(err: LikePostError) -> HttpResponse {
    match err {
        LikePostError::PostNotFound => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        LikePostError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        LikePostError::AlreadyLiked => {
            ApiResponse::conflict("ALREADY_LIKED", "User already liked this post")
        }
        LikePostError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
