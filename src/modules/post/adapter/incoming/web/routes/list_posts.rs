use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    post::application::{
        assembler::{PostView, PostsResponse},
        domain::entities::PostId,
        ports::incoming::use_cases::ListPostsError,
    },
    shared::api::ApiResponse,
    AppState,
};

use super::{invalid_post_id, LimitQuery};

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    tag = "posts",
    params(LimitQuery),
    responses(
        (status = 200, description = "Newest posts (at most 50) with their authors", body = inline(SuccessResponse<PostsResponse>))
    )
)]
#[get("/api/v1/posts")]
pub async fn list_recent_posts_handler(
    data: web::Data<AppState>,
    query: web::Query<LimitQuery>,
) -> impl Responder {
    match data.post.recent.execute(query.limit).await {
        Ok(response) => ApiResponse::success(response),
        Err(err) => map_list_posts_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id_or_username}/posts",
    tag = "posts",
    params(("id_or_username" = String, Path, description = "User id (UUID) or username")),
    responses(
        (status = 200, description = "Posts by the user, newest first", body = inline(SuccessResponse<Vec<PostView>>)),
        (status = 404, description = "No active user matches", body = ErrorResponse)
    )
)]
#[get("/api/v1/users/{id_or_username}/posts")]
pub async fn list_posts_by_author_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.post.by_author.execute(&path).await {
        Ok(posts) => ApiResponse::success(posts),
        Err(err) => map_list_posts_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}/replies",
    tag = "posts",
    params(("id" = String, Path, description = "Post id (UUID)"), LimitQuery),
    responses(
        (status = 200, description = "Direct replies, oldest first", body = inline(SuccessResponse<Vec<PostView>>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No active post with this id", body = ErrorResponse)
    )
)]
#[get("/api/v1/posts/{id}/replies")]
pub async fn list_replies_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LimitQuery>,
) -> impl Responder {
    let id = match PostId::parse(&path) {
        Ok(id) => id,
        Err(_) => return invalid_post_id(),
    };

    match data.post.replies.execute(id, query.limit).await {
        Ok(posts) => ApiResponse::success(posts),
        Err(err) => map_list_posts_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/users/by-username/{username}/mentions",
    tag = "posts",
    params(("username" = String, Path, description = "Username"), LimitQuery),
    responses(
        (status = 200, description = "Posts mentioning the user, newest first", body = inline(SuccessResponse<Vec<PostView>>)),
        (status = 404, description = "No active user with this username", body = ErrorResponse)
    )
)]
#[get("/api/v1/users/by-username/{username}/mentions")]
pub async fn list_mentions_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LimitQuery>,
) -> impl Responder {
    match data.post.mentions.execute(&path, query.limit).await {
        Ok(posts) => ApiResponse::success(posts),
        Err(err) => map_list_posts_error(err),
    }
}

fn map_list_posts_error(err: ListPostsError) -> HttpResponse {
    match err {
        ListPostsError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        ListPostsError::PostNotFound => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        ListPostsError::QueryFailed(_) => ApiResponse::internal_error(),
    }
}
