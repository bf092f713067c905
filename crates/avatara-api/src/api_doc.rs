//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use avatara_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Avatara API",
        version = "0.1.0",
        description = "Avatar generation demo API: upload a photo, pick a style preset, receive a generated avatar locator. Customization is a placeholder contract."
    ),
    paths(
        handlers::health::health_check,
        handlers::generate::generate_avatar,
        handlers::customize::customize_avatar,
    ),
    components(schemas(
        error::ErrorResponse,
        handlers::health::HealthResponse,
        handlers::generate::GenerateAvatarResponse,
        handlers::generate::GenerateAvatarForm,
        handlers::customize::CustomizeAvatarResponse,
        models::CustomizationRequest,
        models::StyleTag,
    )),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "avatars", description = "Avatar generation and customization")
    )
)]
pub struct ApiDoc;
