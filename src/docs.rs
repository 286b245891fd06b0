use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use yoga_models::{
    JwtResponse, LoginRequest, MessageResponse, SessionDto, SignupRequest, TeacherDto, UserDto,
};

use crate::modules::auth::controller::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::register,
        crate::modules::sessions::controller::find_all_sessions,
        crate::modules::sessions::controller::find_session,
        crate::modules::sessions::controller::create_session,
        crate::modules::sessions::controller::update_session,
        crate::modules::sessions::controller::delete_session,
        crate::modules::sessions::controller::participate,
        crate::modules::sessions::controller::no_longer_participate,
        crate::modules::teachers::controller::find_all_teachers,
        crate::modules::teachers::controller::find_teacher,
        crate::modules::users::controller::find_user,
        crate::modules::users::controller::delete_user,
    ),
    components(
        schemas(
            LoginRequest,
            SignupRequest,
            JwtResponse,
            MessageResponse,
            ErrorResponse,
            SessionDto,
            TeacherDto,
            UserDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and signup"),
        (name = "Sessions", description = "Yoga sessions and participation"),
        (name = "Teachers", description = "Studio teachers"),
        (name = "Users", description = "Member accounts")
    ),
    info(
        title = "Yoga Studio API",
        version = "0.1.0",
        description = "Sessions, teachers and members of a yoga studio, behind JWT authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
