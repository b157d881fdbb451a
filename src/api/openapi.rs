use super::handlers::{health, me, recipes, user_login, user_register, ws_info};
use utoipa::openapi::{
    security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    ComponentsBuilder, InfoBuilder, OpenApiBuilder, Tag,
};
use utoipa_axum::{router::OpenApiRouter, routes};

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Reuse the same router wiring and only return the generated OpenAPI spec.
    let (_router, openapi) = api_router().split_for_parts();
    openapi
}

/// Build the router that also drives the `OpenAPI` document.
///
/// Add new endpoints here via `.routes(routes!(...))` so they are both
/// served and included in the generated `OpenAPI` spec. Handlers sharing a
/// path must share a `routes!` call.
pub(crate) fn api_router() -> OpenApiRouter {
    // `routes!` reads #[utoipa::path] to bind HTTP method + path and add the route to OpenAPI.
    let router = OpenApiRouter::with_openapi(base_openapi())
        .routes(routes!(health::health))
        .routes(routes!(ws_info::ws_info))
        .routes(routes!(user_register::register))
        .routes(routes!(user_login::login))
        .routes(routes!(me::me))
        .routes(routes!(recipes::create_recipe, recipes::list_recipes))
        .routes(routes!(
            recipes::get_recipe,
            recipes::update_recipe,
            recipes::delete_recipe
        ));

    router
}

fn base_openapi() -> utoipa::openapi::OpenApi {
    let mut health_tag = Tag::new("Health");
    health_tag.description = Some("Service health and metadata".to_string());

    let mut info_tag = Tag::new("Info");
    info_tag.description = Some("Protocol and usage notes".to_string());

    let mut auth_tag = Tag::new("Auth");
    auth_tag.description = Some("User registration, login, and profile endpoints".to_string());

    let mut recipes_tag = Tag::new("Recipes");
    recipes_tag.description = Some("Endpoints to manage recipes".to_string());

    let info = InfoBuilder::new()
        .title("Recipe Hub API")
        .version(env!("CARGO_PKG_VERSION"))
        .description(Some(env!("CARGO_PKG_DESCRIPTION")))
        .build();

    let components = ComponentsBuilder::new()
        .security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        )
        .build();

    OpenApiBuilder::new()
        .info(info)
        .components(Some(components))
        .tags(Some(vec![health_tag, info_tag, auth_tag, recipes_tag]))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_info() {
        let spec = openapi();
        assert_eq!(spec.info.title, "Recipe Hub API");
        assert_eq!(spec.info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_openapi_documents_all_routes() {
        let spec = openapi();
        let paths = &spec.paths.paths;
        for path in [
            "/health",
            "/ws-info",
            "/auth/register",
            "/auth/login",
            "/auth/me",
            "/recipes",
            "/recipes/{id}",
        ] {
            assert!(paths.contains_key(path), "missing path: {path}");
        }
    }
}
