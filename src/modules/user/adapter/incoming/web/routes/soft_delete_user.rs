use actix_web::{delete, web, HttpResponse, Responder};

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    user::{
        adapter::incoming::web::routes::invalid_user_id,
        application::{
            domain::entities::UserId, ports::incoming::use_cases::SoftDeleteUserError,
        },
    },
    AppState,
};

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id (UUID)")),
    responses(
        (status = 204, description = "User soft-deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No active user with this id", body = ErrorResponse)
    )
)]
#[delete("/api/v1/users/{id}")]
pub async fn soft_delete_user_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match UserId::parse(&path) {
        Ok(id) => id,
        Err(_) => return invalid_user_id(),
    };

    match data.user.soft_delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_soft_delete_error(err),
    }
}

fn map_soft_delete_error(err: SoftDeleteUserError) -> HttpResponse {
    match err {
        SoftDeleteUserError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        SoftDeleteUserError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
