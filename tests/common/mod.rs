#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use yoga::router::init_router;
use yoga::state::AppState;
use yoga_auth::create_access_token;
use yoga_config::{CorsConfig, JwtConfig};
use yoga_db::InMemoryStore;

use yoga_db::{DEMO_ADMIN_EMAIL, DEMO_USER_EMAIL};

pub const ADMIN_ID: i64 = 1;
pub const MEMBER_ID: i64 = 2;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
    pub jwt_config: JwtConfig,
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        access_token_expiry: 3600,
    }
}

/// Router over the demo store: teachers 1-2, admin user 1, member user 2,
/// sessions 1-2.
pub async fn setup_test_app() -> TestApp {
    let store = Arc::new(InMemoryStore::with_demo_data().await.unwrap());
    let jwt_config = jwt_config();

    let state = AppState::new(
        store.clone(),
        jwt_config.clone(),
        CorsConfig::parse("http://localhost:4200"),
    );

    TestApp {
        router: init_router(state),
        store,
        jwt_config,
    }
}

impl TestApp {
    pub fn admin_token(&self) -> String {
        create_access_token(ADMIN_ID, DEMO_ADMIN_EMAIL, true, &self.jwt_config).unwrap()
    }

    pub fn member_token(&self) -> String {
        create_access_token(MEMBER_ID, DEMO_USER_EMAIL, false, &self.jwt_config).unwrap()
    }

    /// Sends one request and returns the status with the JSON body
    /// (`Value::Null` when the body is empty).
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_string(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }
}
