// --- File: crates/services/calendso_backend/src/app.rs ---
use crate::app_state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use calendso_profile::{api_routes, routes as profile_routes};
use serde_json::{json, Value};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "database": state.db_client.is_healthy().await,
    }))
}

/// Assembles the full router: `/api`, static assets and the profile pages.
pub fn build_app(state: AppState) -> Router {
    let config = state.config.clone();
    let profiles = state.profile_state();

    let api_router = Router::new()
        .route("/health", get(health))
        .with_state(state)
        .merge(api_routes(profiles.clone()));

    // `/{username}` would otherwise swallow the favicon request.
    let static_dir = Path::new(&config.site.static_dir);
    #[allow(unused_mut)] // mutated only with the openapi feature
    let mut app = Router::new()
        .nest("/api", api_router)
        .route_service("/favicon.ico", ServeFile::new(static_dir.join("favicon.ico")))
        .nest_service("/static", ServeDir::new(static_dir))
        .merge(profile_routes(profiles));

    #[cfg(feature = "openapi")]
    {
        use calendso_profile::doc::ProfileApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Calendso API",
                version = "0.1.0",
                description = "Calendso public page API docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            tags((name = "Calendso", description = "Core service endpoints")),
            servers((url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(ProfileApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        app = app.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc));
    }

    info!("Serving static files from {}", static_dir.display());
    app.layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use calendso_config::AppConfig;
    use calendso_db::{DbClient, EventTypeRepository, UserRepository};
    use std::path::PathBuf;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct TestDb {
        client: DbClient,
        path: PathBuf,
    }

    impl Drop for TestDb {
        fn drop(&mut self) {
            std::fs::remove_file(&self.path).ok();
        }
    }

    async fn test_db(name: &str) -> TestDb {
        let path = std::env::temp_dir().join(format!(
            "calendso-backend-{}-{}.sqlite",
            name,
            std::process::id()
        ));
        std::fs::remove_file(&path).ok();
        let client = DbClient::from_url(&format!("sqlite:{}", path.display()))
            .await
            .unwrap();
        TestDb { client, path }
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_reports_database_state() {
        let db = test_db("health").await;
        let app = build_app(AppState::new(Arc::new(AppConfig::default()), db.client.clone()));

        let (status, body) = get(app, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json, json!({ "status": "ok", "database": true }));
    }

    #[tokio::test]
    async fn profile_routes_are_mounted() {
        let db = test_db("mounted").await;
        let state = AppState::new(Arc::new(AppConfig::default()), db.client.clone());
        let profiles = state.profile_state();
        profiles.users.init_schema().await.unwrap();
        profiles.event_types.init_schema().await.unwrap();
        db.client
            .execute("INSERT INTO users (id, username, name) VALUES (1, 'jane', 'Jane')")
            .await
            .unwrap();
        let app = build_app(state);

        let (status, body) = get(app.clone(), "/jane").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Uh oh!"));

        let (status, _) = get(app.clone(), "/api/profile/jane").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = get(app, "/nobody").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_favicon_is_not_a_profile_lookup() {
        let db = test_db("favicon").await;
        let mut config = AppConfig::default();
        config.site.static_dir = std::env::temp_dir()
            .join(format!("calendso-no-static-{}", std::process::id()))
            .display()
            .to_string();
        let app = build_app(AppState::new(Arc::new(config), db.client.clone()));

        // Schema is never created, so a profile lookup here would be a 500.
        let (status, _) = get(app, "/favicon.ico").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
