use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::Client;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tempfile::TempDir;

use cupcakes::config::{AppConfig, CorsConfig, DatabaseConfig, ServerConfig};
use cupcakes::state::AppState;

pub mod routes {
    pub const INDEX: &str = "/";
    pub const CUPCAKES: &str = "/api/cupcakes";
    pub const CLIENT_SCRIPT: &str = "/static/cupcakes.js";
    pub const OPENAPI: &str = "/api-docs/openapi.json";

    pub fn cupcake(id: i64) -> String {
        format!("/api/cupcakes/{id}")
    }

    pub fn search(term: &str) -> String {
        format!("/api/cupcakes/search?term={term}")
    }

    pub fn edit_page(id: i64) -> String {
        format!("/edit-cupcake/{id}")
    }
}

/// A running test server backed by its own SQLite file.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DatabaseConnection,
    _dir: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    pub content_type: String,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

        let mut database = DatabaseConfig::new(db_url);
        database.max_connections = 1;

        let app_config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig::default(),
            },
            database,
        };

        let db = cupcakes::database::init_db(&app_config.database)
            .await
            .expect("Failed to initialize test database");
        let templates = cupcakes::views::load_templates().expect("Failed to load templates");

        let state = AppState {
            db: db.clone(),
            templates: Arc::new(templates),
            config: app_config,
        };

        let app = cupcakes::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            db,
            _dir: dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .form(fields)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_raw(&self, path: &str, content_type: &str, body: &str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Content-Type", content_type)
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn patch_json(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send PATCH request");

        TestResponse::from_response(res).await
    }

    pub async fn patch_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let res = self
            .client
            .patch(self.url(path))
            .form(fields)
            .send()
            .await
            .expect("Failed to send PATCH request");

        TestResponse::from_response(res).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send DELETE request");

        TestResponse::from_response(res).await
    }

    /// Create a cupcake via the API and return its `id`.
    pub async fn create_cupcake(&self, flavor: &str, size: &str, rating: f64) -> i64 {
        let res = self
            .post_json(
                routes::CUPCAKES,
                &serde_json::json!({
                    "flavor": flavor,
                    "size": size,
                    "rating": rating,
                    "image": "http://x/y.png",
                }),
            )
            .await;
        assert_eq!(res.status, 201, "create_cupcake failed: {}", res.text);
        res.id()
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let content_type = res
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self {
            status,
            content_type,
            text,
            body,
        }
    }

    /// The `id` of the `{"cupcake": {...}}` in the body.
    pub fn id(&self) -> i64 {
        self.body["cupcake"]["id"]
            .as_i64()
            .expect("response body should contain 'cupcake.id'")
    }

    /// Flavors of the `{"cupcakes": [...]}` in the body, in order.
    pub fn flavors(&self) -> Vec<String> {
        self.body["cupcakes"]
            .as_array()
            .expect("response body should contain 'cupcakes'")
            .iter()
            .map(|c| c["flavor"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}
