use actix_web::HttpResponse;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::shared::api::ApiResponse;

/// `?limit=` on listing routes. Values above the listing's cap are lowered
/// to the cap.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitQuery {
    /// Maximum number of items to return
    pub limit: Option<u64>,
}

pub(crate) fn invalid_post_id() -> HttpResponse {
    ApiResponse::bad_request("INVALID_POST_ID", "Post id must be a valid UUID")
}
