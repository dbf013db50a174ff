use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::ApiResponse,
    user::application::{
        domain::entities::{User, UserId},
        ports::incoming::use_cases::GetUserError,
    },
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id (UUID)")),
    responses(
        (status = 200, description = "Active user", body = inline(SuccessResponse<User>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No active user with this id", body = ErrorResponse)
    )
)]
#[get("/api/v1/users/{id}")]
pub async fn get_user_handler(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = match UserId::parse(&path) {
        Ok(id) => id,
        Err(_) => return invalid_user_id(),
    };

    match data.user.get.execute(id).await {
        Ok(user) => ApiResponse::success(user),
        Err(err) => map_get_user_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/users/by-username/{username}",
    tag = "users",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "Active user", body = inline(SuccessResponse<User>)),
        (status = 404, description = "No active user with this username", body = ErrorResponse)
    )
)]
#[get("/api/v1/users/by-username/{username}")]
pub async fn get_user_by_username_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.user.get_by_username.execute(&path).await {
        Ok(user) => ApiResponse::success(user),
        Err(err) => map_get_user_error(err),
    }
}

pub(crate) fn invalid_user_id() -> HttpResponse {
    ApiResponse::bad_request("INVALID_USER_ID", "User id must be a valid UUID")
}

fn map_get_user_error(err: GetUserError) -> HttpResponse {
    match err {
        GetUserError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        GetUserError::QueryFailed(_) => ApiResponse::internal_error(),
    }
}
