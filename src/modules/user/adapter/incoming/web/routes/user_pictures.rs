use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    user::application::{domain::entities::PictureKind, ports::incoming::use_cases::PictureUrlError},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1/users/by-username/{username}/profile-picture",
    tag = "users",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 302, description = "Redirect to the latest profile picture"),
        (status = 404, description = "Unknown user or no picture", body = ErrorResponse)
    )
)]
#[get("/api/v1/users/by-username/{username}/profile-picture")]
pub async fn profile_picture_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    redirect_to_picture(&data, &path, PictureKind::Profile).await
}

#[utoipa::path(
    get,
    path = "/api/v1/users/by-username/{username}/bio-picture",
    tag = "users",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 302, description = "Redirect to the latest bio picture"),
        (status = 404, description = "Unknown user or no picture", body = ErrorResponse)
    )
)]
#[get("/api/v1/users/by-username/{username}/bio-picture")]
pub async fn bio_picture_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    redirect_to_picture(&data, &path, PictureKind::Bio).await
}

async fn redirect_to_picture(data: &AppState, username: &str, kind: PictureKind) -> HttpResponse {
    match data.user.picture_url.execute(username, kind).await {
        Ok(url) => ApiResponse::found(&url),
        Err(PictureUrlError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(PictureUrlError::PictureNotFound) => {
            ApiResponse::not_found("PICTURE_NOT_FOUND", "Picture not found")
        }
        Err(PictureUrlError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}
