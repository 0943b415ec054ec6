//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for the JSON side of the API.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{UserResponse, UserRole};

/// OpenAPI documentation for the user directory
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory",
        version = "0.1.0",
        description = "Server-rendered user directory with a JSON listing endpoint",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(user_handler::list_users_json),
    components(schemas(UserRole, UserResponse)),
    tags(
        (name = "Users", description = "User listing")
    )
)]
pub struct ApiDoc;
