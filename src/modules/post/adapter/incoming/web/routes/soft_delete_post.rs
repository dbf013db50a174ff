use actix_web::{delete, web, Responder};

use crate::{
    api::schemas::ErrorResponse,
    post::application::{
        domain::entities::PostId, ports::incoming::use_cases::SoftDeletePostError,
    },
    shared::api::ApiResponse,
    AppState,
};

use super::invalid_post_id;

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post id (UUID)")),
    responses(
        (status = 204, description = "Post marked deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No active post with this id", body = ErrorResponse)
    )
)]
#[delete("/api/v1/posts/{id}")]
pub async fn soft_delete_post_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match PostId::parse(&path) {
        Ok(id) => id,
        Err(_) => return invalid_post_id(),
    };

    match data.post.soft_delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(SoftDeletePostError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }
        Err(SoftDeletePostError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}
