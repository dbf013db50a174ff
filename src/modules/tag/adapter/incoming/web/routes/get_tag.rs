use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    post::{adapter::incoming::web::routes::LimitQuery, application::assembler::PostView},
    shared::api::ApiResponse,
    tag::application::{
        domain::entities::Tag,
        ports::incoming::use_cases::{GetTagError, ListPostsByTagError},
    },
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1/tags/{text}",
    tag = "tags",
    params(("text" = String, Path, description = "Tag text, with or without '#'")),
    responses(
        (status = 200, description = "Tag", body = inline(SuccessResponse<Tag>)),
        (status = 404, description = "Tag not found", body = ErrorResponse)
    )
)]
#[get("/api/v1/tags/{text}")]
pub async fn get_tag_handler(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match data.tag.get.execute(&path).await {
        Ok(tag) => ApiResponse::success(tag),
        Err(GetTagError::TagNotFound) => ApiResponse::not_found("TAG_NOT_FOUND", "Tag not found"),
        Err(GetTagError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/tags/{text}/posts",
    tag = "tags",
    params(("text" = String, Path, description = "Tag text, with or without '#'"), LimitQuery),
    responses(
        (status = 200, description = "Tagged posts, newest first (at most 100). Empty for unknown tags", body = inline(SuccessResponse<Vec<PostView>>))
    )
)]
#[get("/api/v1/tags/{text}/posts")]
pub async fn list_posts_by_tag_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LimitQuery>,
) -> impl Responder {
    match data.tag.posts.execute(&path, query.limit).await {
        Ok(posts) => ApiResponse::success(posts),
        Err(ListPostsByTagError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}
