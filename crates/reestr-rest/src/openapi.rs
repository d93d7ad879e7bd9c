//! OpenAPI documentation configuration.

use crate::controllers::{HealthResponse, OrganizationPageResponse};
use reestr_core::{ErrorResponse, Organization};
use utoipa::OpenApi;

/// OpenAPI documentation for the Reestr API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Reestr API",
        version = "1.0.0",
        description = "Searchable, paginated directory of organizations from the state registry"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        crate::controllers::organization_controller::list_organizations,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            Organization,
            OrganizationPageResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "organizations", description = "Organization directory"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
