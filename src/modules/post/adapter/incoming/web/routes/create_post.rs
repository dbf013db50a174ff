use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    post::application::{
        assembler::PostView,
        domain::entities::PostId,
        ports::incoming::use_cases::{CreatePostCommand, CreatePostCommandError, CreatePostError},
    },
    shared::api::ApiResponse,
    user::{
        adapter::incoming::web::routes::invalid_user_id, application::domain::entities::UserId,
    },
    AppState,
};

use super::invalid_post_id;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[schema(example = "0b6f5d1e-3c1a-4c56-9d7e-2f4b8a1c9e10")]
    pub author_id: String,

    /// `#hashtags` and `@mentions` in the content are picked up
    #[schema(example = "Just finished a great hike in the mountains! #nature #adventure")]
    pub content: String,

    /// Post being replied to
    pub parent_id: Option<String>,

    /// Extra tags, merged with the hashtags in the content
    #[serde(default)]
    #[schema(example = json!(["travel"]))]
    pub tags: Vec<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = inline(SuccessResponse<PostView>)),
        (status = 400, description = "Invalid ids, content or tags", body = ErrorResponse),
        (status = 404, description = "Author or parent post not found", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    )
)]
#[post("/api/v1/posts")]
pub async fn create_post_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreatePostRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let author = match UserId::parse(&payload.author_id) {
        Ok(id) => id,
        Err(_) => return invalid_user_id(),
    };

    let parent = match payload.parent_id.as_deref().map(PostId::parse).transpose() {
        Ok(parent) => parent,
        Err(_) => return invalid_post_id(),
    };

    let command = match CreatePostCommand::new(author, &payload.content, parent, &payload.tags) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.post.create.execute(command).await {
        Ok(post) => ApiResponse::created(post),
        Err(err) => map_create_post_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreatePostCommandError) -> HttpResponse {
    match err {
        CreatePostCommandError::EmptyContent => {
            ApiResponse::bad_request("EMPTY_CONTENT", "Content cannot be empty")
        }
        CreatePostCommandError::ContentTooLong => ApiResponse::bad_request(
            "CONTENT_TOO_LONG",
            "Content must not exceed 1000 characters",
        ),
        err @ CreatePostCommandError::InvalidTag { .. } => {
            ApiResponse::bad_request("INVALID_TAG", &err.to_string())
        }
    }
}

fn map_create_post_error(err: CreatePostError) -> HttpResponse {
    match err {
        CreatePostError::AuthorNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "Author not found")
        }
        CreatePostError::ParentNotFound => {
            ApiResponse::not_found("POST_NOT_FOUND", "Parent post not found")
        }
        CreatePostError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
