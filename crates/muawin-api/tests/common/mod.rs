//! Common test utilities and harness for muawin-api integration tests.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use muawin_api::{router, AppState};
use muawin_store::{PatientStore, SqliteStore};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// Test harness for integration tests.
///
/// Owns a temporary SQLite file and the router built on top of it.
pub struct TestHarness {
    /// Router under test
    pub app: Router,
    /// Store the router writes to
    pub store: Arc<SqliteStore>,
    _dir: TempDir,
}

impl TestHarness {
    /// Creates a harness with an empty on-disk store.
    pub async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(SqliteStore::open(dir.path().join("muawin.db")).await.unwrap());
        let app = router(AppState::new(store.clone() as Arc<dyn PatientStore>));
        Self {
            app,
            store,
            _dir: dir,
        }
    }

    /// Sends a GET request, returning status and body text.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(req).await
    }

    /// Posts an urlencoded form body.
    pub async fn post_form(&self, uri: &str, body: &str) -> (StatusCode, String) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(req).await
    }

    /// Sends a JSON body with `PUT`.
    pub async fn put_json(&self, uri: &str, body: serde_json::Value) -> (StatusCode, String) {
        let req = Request::builder()
            .method("PUT")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> (StatusCode, String) {
        let resp = self.app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }
}

/// Form body for a complete save of patient P001.
pub fn jane_form() -> &'static str {
    "id=P001&name=Jane+Doe&age=34&gender=Female&language=Urdu\
     &condition=diabetes&condition=asthma&custom_conditions=Migraine%2C+Gout"
}
