//! Documentation-only mirrors of `shared::api::ApiResponse`. Handlers never
//! build these; they exist so the OpenAPI document shows the real envelope.

use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::api::ApiError;

#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ApiError,
}
