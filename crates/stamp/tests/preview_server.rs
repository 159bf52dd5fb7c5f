//! Request-level tests for the preview server router.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use stamp::{PreviewServer, ServerConfig, DEFAULT_ADDR};
use stamp_map::{parse_str, DataMapping, DEFAULT_SEPARATOR};
use stamp_render::{MiniJinjaLoader, TemplateSpec};
use tempfile::TempDir;
use tower::ServiceExt;

fn router(dir: &Path, template: &str, data: DataMapping) -> Router {
    PreviewServer::new(
        ServerConfig {
            addr: DEFAULT_ADDR,
            asset_root: dir.join("assets"),
        },
        Arc::new(MiniJinjaLoader::new()),
        TemplateSpec::new(dir.join(template)),
        data,
    )
    .router()
}

async fn request(router: &Router, method: Method, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    request(router, Method::GET, uri).await
}

#[tokio::test]
async fn test_renders_template_with_startup_data() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("page.j2"), "Hello {{ name }}").unwrap();
    let data = parse_str("name·Ada\n", DEFAULT_SEPARATOR).unwrap();
    let router = router(dir.path(), "page.j2", data);

    let (status, body) = get(&router, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello Ada");
}

#[tokio::test]
async fn test_any_path_renders() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("page.j2"), "same").unwrap();
    let router = router(dir.path(), "page.j2", DataMapping::new());

    let (status, body) = get(&router, "/some/deep/path.html").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "same");
}

#[tokio::test]
async fn test_edits_visible_without_restart() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("page.j2");
    fs::write(&template, "version one").unwrap();
    let router = router(dir.path(), "page.j2", DataMapping::new());

    let (_, first) = get(&router, "/").await;
    fs::write(&template, "version two").unwrap();
    let (_, second) = get(&router, "/").await;

    assert_eq!(first, "version one");
    assert_eq!(second, "version two");
}

#[tokio::test]
async fn test_render_error_is_500_and_server_recovers() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("page.j2");
    fs::write(&template, "{{ user.name }}").unwrap();
    let router = router(dir.path(), "page.j2", DataMapping::new());

    let (status, body) = get(&router, "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("template error"));

    fs::write(&template, "fixed").unwrap();
    let (status, body) = get(&router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "fixed");
}

#[tokio::test]
async fn test_load_error_is_500() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("page.j2");
    fs::write(&template, "{% for x in %}").unwrap();
    let router = router(dir.path(), "page.j2", DataMapping::new());

    let (status, _) = get(&router, "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    fs::remove_file(&template).unwrap();
    let (status, body) = get(&router, "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("page.j2"));
}

#[tokio::test]
async fn test_include_serves_static_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("page.j2"), "page").unwrap();
    fs::create_dir_all(dir.path().join("assets/css")).unwrap();
    fs::write(dir.path().join("assets/css/site.css"), "body {}").unwrap();
    let router = router(dir.path(), "page.j2", DataMapping::new());

    let (status, body) = get(&router, "/include/css/site.css").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body {}");
}

#[tokio::test]
async fn test_include_missing_file_is_404() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("page.j2"), "page").unwrap();
    fs::create_dir_all(dir.path().join("assets")).unwrap();
    let router = router(dir.path(), "page.j2", DataMapping::new());

    let (status, body) = get(&router, "/include/missing.js").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_ne!(body, "page");
}

#[tokio::test]
async fn test_non_get_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("page.j2"), "page").unwrap();
    let router = router(dir.path(), "page.j2", DataMapping::new());

    let (status, _) = request(&router, Method::POST, "/").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
