use actix_web::{post, web, HttpResponse, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    graph::application::{
        domain::entities::EdgeRef,
        ports::incoming::use_cases::{FollowCommand, FollowCommandError, FollowUserError},
    },
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/v1/users/{id}/follows/{target_id}",
    tag = "graph",
    params(
        ("id" = String, Path, description = "Follower id (UUID)"),
        ("target_id" = String, Path, description = "Followed user id (UUID)")
    ),
    responses(
        (status = 201, description = "Follow edge created", body = inline(SuccessResponse<EdgeRef>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Actor or target is not an active user", body = ErrorResponse),
        (status = 409, description = "User already being followed", body = ErrorResponse),
        (status = 500, description = "Graph store unavailable", body = ErrorResponse)
    )
)]
#[post("/api/v1/users/{id}/follows/{target_id}")]
pub async fn follow_user_handler(
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (actor, target) = path.into_inner();

    let command = match FollowCommand::new(&actor, &target) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.graph.follow.execute(command).await {
        Ok(edge) => ApiResponse::created(edge),
        Err(err) => map_follow_error(err),
    }
}

fn map_command_error(err: FollowCommandError) -> HttpResponse {
    match err {
        FollowCommandError::MissingActorId | FollowCommandError::InvalidActorId => {
            ApiResponse::bad_request("INVALID_USER_ID", "User id must be a valid UUID")
        }
        FollowCommandError::MissingTargetId | FollowCommandError::InvalidTargetId => {
            ApiResponse::bad_request("INVALID_TARGET_ID", "Target id must be a valid UUID")
        }
    }
}

fn map_follow_error(err: FollowUserError) -> HttpResponse {
    match err {
        FollowUserError::AlreadyFollowing => {
            ApiResponse::conflict("ALREADY_FOLLOWING", "User already being followed")
        }
        FollowUserError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        FollowUserError::StoreUnavailable(_) => ApiResponse::internal_error(),
    }
}
