//! HTTP server mode: the directory as a browsable HTML page

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::error::{Error, Result};
use crate::render::{HtmlRenderer, RenderOptions, Renderer};
use crate::source::DataSource;
use crate::types::JsonValue;
use crate::viewer::{fetch_with_timeout, DirectoryViewer, LoadOutcome, PageView};

/// Viewer type the server drives
pub type SharedViewer = DirectoryViewer<Arc<dyn DataSource>>;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Optional table parts
    pub render: RenderOptions,
}

/// App state shared across handlers.
///
/// Every handler goes through the one mutex, so navigation and fetch
/// completions are applied one at a time. The lock is not held while a
/// fetch is in flight.
pub struct AppState {
    viewer: Mutex<SharedViewer>,
    renderer: HtmlRenderer,
}

impl AppState {
    /// Wrap a viewer for serving
    pub fn new(viewer: SharedViewer, render: RenderOptions) -> Self {
        Self {
            viewer: Mutex::new(viewer),
            renderer: HtmlRenderer::new(render),
        }
    }
}

/// Query string accepted by the page endpoints
#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<usize>,
}

/// Build the router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/employees", get(employees))
        .route("/refresh", post(refresh))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Load the directory, then start the HTTP server
pub async fn serve(viewer: SharedViewer, config: ServerConfig) -> Result<()> {
    let state = Arc::new(AppState::new(viewer, config.render));

    match reload(&state).await {
        LoadOutcome::Failed { message } => tracing::warn!("Initial load failed: {}", message),
        outcome => tracing::debug!(?outcome, "Initial load"),
    }

    let app = router(state);
    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::server(format!("Failed to bind to {addr}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::server(format!("Server error: {e}")))?;

    Ok(())
}

/// Run one fetch without holding the lock while it is in flight
pub async fn reload(state: &AppState) -> LoadOutcome {
    let (ticket, source, timeout) = {
        let mut viewer = state.viewer.lock().await;
        (
            viewer.begin_fetch(),
            Arc::clone(viewer.source()),
            viewer.timeout(),
        )
    };

    let result = fetch_with_timeout(source.as_ref(), timeout).await;
    state.viewer.lock().await.complete_fetch(ticket, result)
}

/// Apply an optional page request and snapshot the result
async fn page_view(state: &AppState, page: Option<usize>) -> PageView {
    let refetch = {
        let mut viewer = state.viewer.lock().await;
        let moved = page.is_some_and(|p| viewer.navigate_only(p));
        viewer.needs_refetch(moved)
    };

    if refetch {
        reload(state).await;
    }

    state.viewer.lock().await.view()
}

/// HTML page
async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let view = page_view(&state, query.page).await;
    Html(state.renderer.render(&view))
}

/// JSON page view
async fn employees(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    Json(page_view(&state, query.page).await)
}

/// Fetch the directory again
async fn refresh(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body: JsonValue = match reload(&state).await {
        LoadOutcome::Loaded { count } => json!({ "status": "loaded", "count": count }),
        LoadOutcome::Failed { message } => {
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "status": "failed", "error": message })),
            )
        }
        LoadOutcome::Stale => json!({ "status": "stale" }),
    };
    (StatusCode::OK, Json(body))
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FETCH_FAILURE_MESSAGE;
    use crate::pagination::PageSize;
    use crate::source::StaticDataSource;
    use crate::types::{Employee, RefetchPolicy};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    struct DownSource;

    #[async_trait]
    impl DataSource for DownSource {
        async fn fetch_all(&self) -> Result<Vec<Employee>> {
            Err(Error::http_status(500, ""))
        }

        fn describe(&self) -> String {
            "down".to_string()
        }
    }

    fn records(count: usize) -> Vec<Employee> {
        (1..=count)
            .map(|i| {
                Employee::new(
                    i.to_string(),
                    format!("Employee {i}"),
                    format!("e{i}@mailinator.com"),
                    "member",
                )
            })
            .collect()
    }

    async fn loaded_state(source: Arc<dyn DataSource>, policy: RefetchPolicy) -> Arc<AppState> {
        let viewer = DirectoryViewer::new(source, PageSize::new(10).unwrap()).with_refetch(policy);
        let state = Arc::new(AppState::new(
            viewer,
            RenderOptions {
                show_id: true,
                numbered: true,
            },
        ));
        reload(&state).await;
        state
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let state = loaded_state(Arc::new(StaticDataSource::default()), RefetchPolicy::Once).await;
        let (status, body) = get_body(router(state), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("ok"));
    }

    #[tokio::test]
    async fn test_index_renders_requested_page() {
        let source: Arc<dyn DataSource> = Arc::new(StaticDataSource::new(records(25)));
        let state = loaded_state(source, RefetchPolicy::Once).await;

        let (status, body) = get_body(router(state), "/?page=3").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Page 3 of 3"));
        assert!(body.contains("Employee 25"));
        assert!(!body.contains("Employee 20<"));
        assert!(body.contains("<button disabled>Next</button>"));
    }

    #[tokio::test]
    async fn test_index_ignores_out_of_range_page() {
        let source: Arc<dyn DataSource> = Arc::new(StaticDataSource::new(records(25)));
        let state = loaded_state(source, RefetchPolicy::Once).await;

        let (_, body) = get_body(router(Arc::clone(&state)), "/?page=2").await;
        assert!(body.contains("Page 2 of 3"));

        let (_, body) = get_body(router(state), "/?page=7").await;
        assert!(body.contains("Page 2 of 3"));
    }

    #[tokio::test]
    async fn test_index_shows_failure_inline() {
        let state = loaded_state(Arc::new(DownSource), RefetchPolicy::Once).await;

        let (status, body) = get_body(router(state), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(FETCH_FAILURE_MESSAGE));
        assert!(body.contains("No data available"));
        assert!(body.contains("Page 1 of 1"));
    }

    #[tokio::test]
    async fn test_api_returns_page_view() {
        let source: Arc<dyn DataSource> = Arc::new(StaticDataSource::new(records(12)));
        let state = loaded_state(source, RefetchPolicy::OnPageChange).await;

        let (status, body) = get_body(router(state), "/api/employees?page=2").await;
        assert_eq!(status, StatusCode::OK);

        let view: JsonValue = serde_json::from_str(&body).unwrap();
        assert_eq!(view["page"], 2);
        assert_eq!(view["total_pages"], 2);
        assert_eq!(view["rows"].as_array().unwrap().len(), 2);
        assert_eq!(view["can_go_next"], false);
        assert_eq!(view["can_go_previous"], true);
    }

    #[tokio::test]
    async fn test_refresh_failure_is_bad_gateway() {
        let state = loaded_state(Arc::new(DownSource), RefetchPolicy::Once).await;

        let response = router(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/refresh")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
