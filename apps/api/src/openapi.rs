//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the ShelfLine API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ShelfLine API",
        version = "0.1.0",
        description = "Inventory and user management API"
    ),
    nest(
        (path = "/api/products", api = domain_inventory::ApiDoc),
        (path = "/api/users", api = domain_users::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Inventory management endpoints"),
        (name = "Users", description = "User management and authentication endpoints")
    )
)]
pub struct ApiDoc;
