use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    post::application::{
        assembler::PostsResponse, domain::entities::PostId,
        ports::incoming::use_cases::GetPostError,
    },
    shared::api::ApiResponse,
    AppState,
};

use super::invalid_post_id;

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post id (UUID)")),
    responses(
        (status = 200, description = "Post with its author", body = inline(SuccessResponse<PostsResponse>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No active post with this id", body = ErrorResponse)
    )
)]
#[get("/api/v1/posts/{id}")]
pub async fn get_post_handler(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = match PostId::parse(&path) {
        Ok(id) => id,
        Err(_) => return invalid_post_id(),
    };

    match data.post.get.execute(id).await {
        Ok(response) => ApiResponse::success(response),
        Err(err) => map_get_post_error(err),
    }
}

fn map_get_post_error(err: GetPostError) -> HttpResponse {
    match err {
        GetPostError::PostNotFound => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        GetPostError::QueryFailed(_) => ApiResponse::internal_error(),
    }
}
