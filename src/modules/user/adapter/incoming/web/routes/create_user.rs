use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::ApiResponse,
    user::application::{
        domain::entities::{UserRef, UsernameError},
        ports::incoming::use_cases::{CreateUserCommand, CreateUserCommandError, CreateUserError},
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Unique among active users. Letters, digits, `_` and `.`
    #[schema(example = "jdoe")]
    pub username: String,

    #[schema(example = "John")]
    pub first_name: String,

    #[schema(example = "Doe")]
    pub last_name: String,

    #[schema(example = "Outdoor enthusiast and avid hiker.")]
    pub biography: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<UserRef>)),
        (status = 400, description = "Invalid username or name", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    )
)]
#[post("/api/v1/users")]
pub async fn create_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateUserCommand::new(
        &payload.username,
        &payload.first_name,
        &payload.last_name,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    let command = match payload.biography.as_deref() {
        Some(bio) => command.with_biography(bio),
        None => command,
    };

    match data.user.create.execute(command).await {
        Ok(user) => ApiResponse::created(user),
        Err(err) => map_create_user_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateUserCommandError) -> HttpResponse {
    match err {
        CreateUserCommandError::InvalidUsername(UsernameError::Empty) => {
            ApiResponse::bad_request("EMPTY_USERNAME", "Username cannot be empty")
        }
        CreateUserCommandError::InvalidUsername(UsernameError::TooLong) => {
            ApiResponse::bad_request("USERNAME_TOO_LONG", "Username must not exceed 50 characters")
        }
        CreateUserCommandError::InvalidUsername(UsernameError::InvalidCharacters) => {
            ApiResponse::bad_request(
                "INVALID_USERNAME",
                "Username may only contain letters, digits, '_' and '.'",
            )
        }
        CreateUserCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "First and last name cannot both be empty")
        }
        CreateUserCommandError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Display name is too long")
        }
    }
}

fn map_create_user_error(err: CreateUserError) -> HttpResponse {
    match err {
        CreateUserError::UsernameTaken => {
            ApiResponse::conflict("USERNAME_TAKEN", "Username is already taken")
        }
        CreateUserError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
