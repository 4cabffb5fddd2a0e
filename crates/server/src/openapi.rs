use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CreateSingerRequest {
    #[schema(example = 6)]
    pub singer_id: i64,
    #[schema(example = "Cat")]
    pub first_name: String,
    #[schema(example = "Meow")]
    pub last_name: String,
}

#[derive(ToSchema)]
pub struct UpdateFirstNameRequest {
    #[schema(example = "Bow")]
    pub first_name: String,
}

#[derive(ToSchema)]
pub struct SingerResponse { pub first_name: String, pub last_name: String }

#[derive(Serialize, ToSchema)]
pub struct SuccessResponse {
    #[serde(rename = "Success")]
    pub success: bool,
}

/// `error` is one of `ValidationError`, `NotFoundError`, `ConflictError`, `DependencyError`.
#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String, pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::hello,
        crate::routes::health,
        crate::routes::singers::add,
        crate::routes::singers::get_singer,
        crate::routes::singers::update_first_name,
        crate::routes::singers::delete_singer,
    ),
    components(
        schemas(
            HealthResponse,
            CreateSingerRequest,
            UpdateFirstNameRequest,
            SingerResponse,
            SuccessResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "singers")
    )
)]
pub struct ApiDoc;
