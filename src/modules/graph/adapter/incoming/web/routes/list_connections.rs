use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    graph::application::{
        domain::entities::Direction, ports::incoming::use_cases::ListConnectionsError,
    },
    shared::api::ApiResponse,
    user::{
        adapter::incoming::web::routes::invalid_user_id,
        application::domain::entities::{UserId, UserSummary},
    },
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/following",
    tag = "graph",
    params(("id" = String, Path, description = "User id (UUID)")),
    responses(
        (status = 200, description = "Users followed by this user", body = inline(SuccessResponse<Vec<UserSummary>>)),
        (status = 404, description = "No active user with this id", body = ErrorResponse)
    )
)]
#[get("/api/v1/users/{id}/following")]
pub async fn list_following_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    list_connections(&data, &path, Direction::Outbound).await
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/followers",
    tag = "graph",
    params(("id" = String, Path, description = "User id (UUID)")),
    responses(
        (status = 200, description = "Users following this user", body = inline(SuccessResponse<Vec<UserSummary>>)),
        (status = 404, description = "No active user with this id", body = ErrorResponse)
    )
)]
#[get("/api/v1/users/{id}/followers")]
pub async fn list_followers_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    list_connections(&data, &path, Direction::Inbound).await
}

async fn list_connections(data: &AppState, raw_id: &str, direction: Direction) -> HttpResponse {
    let id = match UserId::parse(raw_id) {
        Ok(id) => id,
        Err(_) => return invalid_user_id(),
    };

    match data.graph.connections.execute(id, direction).await {
        Ok(users) => ApiResponse::success(users),
        Err(ListConnectionsError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(ListConnectionsError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        stubs::{sample_user, StubListConnectionsUseCase},
    };

    #[actix_web::test]
    async fn lists_following() {
        let paula = sample_user("paula_g").summary();
        let app_state = TestAppStateBuilder::default()
            .with_list_connections(StubListConnectionsUseCase::success(vec![paula.clone()]))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(list_following_handler))
                .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/users/{}/following", UserId::new()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["username"], "paula_g");
        assert_eq!(body["data"][0]["id"], paula.id.to_string());
    }

    #[actix_web::test]
    async fn followers_of_unknown_user_is_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_list_connections(StubListConnectionsUseCase::failure(
                ListConnectionsError::UserNotFound,
            ))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(list_followers_handler))
                .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/users/{}/followers", UserId::new()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
