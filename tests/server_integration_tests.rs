//! Preview Server Integration Tests
//!
//! Run with: cargo test --features server --test server_integration_tests

#[cfg(feature = "server")]
mod server_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use portfolio_site::server::{create_router, AppState};
    use portfolio_site::SiteConfig;
    use serde_json::Value;
    use std::path::PathBuf;
    use tower::ServiceExt; // for oneshot

    // Helper: site directory with an optional projects data file
    async fn site_dir(name: &str, projects: Option<&str>) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("portfolio_site_{}_{}", name, std::process::id()));
        let _ = tokio::fs::remove_dir_all(&dir).await;
        tokio::fs::create_dir_all(dir.join("src")).await.unwrap();
        tokio::fs::write(dir.join("index.html"), "<main id=\"home\"></main>").await.unwrap();
        if let Some(json) = projects {
            tokio::fs::write(dir.join("src/projects.json"), json).await.unwrap();
        }
        dir
    }

    async fn get(dir: PathBuf, uri: &str) -> (StatusCode, String) {
        let app = create_router(AppState::new(dir, SiteConfig::default()));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = site_dir("health", None).await;
        let (status, body) = get(dir, "/health").await;

        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_fragment_renders_cards() {
        let dir = site_dir("fragment", Some(r#"[{"name":"A"},{"name":"B & C"}]"#)).await;
        let (status, body) = get(dir, "/fragments/projects").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<div id=\"project-list\">"));
        assert_eq!(body.matches("class=\"project-card\"").count(), 2);
        assert!(body.contains("<h3>B &amp; C</h3>"));
    }

    #[tokio::test]
    async fn test_fragment_without_data_file_shows_error() {
        let dir = site_dir("fragment_missing", None).await;
        let (status, body) = get(dir, "/fragments/projects").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("class=\"load-error\"").count(), 1);
        assert!(!body.contains("project-card"));
        assert!(body.contains("Unable to load projects."));
    }

    #[tokio::test]
    async fn test_api_projects() {
        let dir = site_dir("api", Some(r#"[{"name":"A","short-description":"x","unknown":1}]"#)).await;
        let (status, body) = get(dir, "/api/projects").await;

        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body, serde_json::json!([{ "name": "A", "short-description": "x" }]));
    }

    #[tokio::test]
    async fn test_api_projects_errors() {
        let dir = site_dir("api_missing", None).await;
        let (status, body) = get(dir, "/api/projects").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert!(body["error"].is_string());

        let dir = site_dir("api_bad", Some("{\"not\": \"a list\"}")).await;
        let (status, _) = get(dir, "/api/projects").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_static_files_served() {
        let dir = site_dir("static", None).await;
        let (status, body) = get(dir, "/index.html").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<main id=\"home\">"));
    }
}
