use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "User API",
        version = "0.1.0",
        description = "Create, read, update and delete users"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/users", api = domain_users::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_paths_are_nested() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        assert!(paths.iter().any(|p| p == "/users/{id}"), "{paths:?}");
        assert!(paths.iter().all(|p| p.starts_with("/users")), "{paths:?}");
    }
}
