//! HTTP client for the upstream admin API.
//!
//! The admin API owns credential checks, sessions and its own health
//! reporting. This client only forwards requests and classifies responses.

use crate::config::AdminApiConfig;
use crate::error::UpstreamError;
use samcast_admin_core::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for the upstream admin API.
pub struct AdminApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl AdminApiClient {
    /// Builds a client for the configured admin API.
    pub fn new(config: &AdminApiConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| UpstreamError::Configuration {
                details: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Forwards a login attempt to `POST /auth/login`.
    #[instrument(skip(self, password), fields(base_url = %self.base_url))]
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> std::result::Result<(), UpstreamError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| UpstreamError::Unreachable {
                details: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(status = %status, "login accepted upstream");
            return Ok(());
        }
        if status.is_server_error() {
            return Err(UpstreamError::Unavailable {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.unwrap_or_default();
        Err(UpstreamError::Rejected {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }

    /// Probes `GET /health`. Any 2xx answer counts as healthy.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn health(&self) -> std::result::Result<bool, UpstreamError> {
        let response = self
            .http
            .get(self.url("/health"))
            .send()
            .await
            .map_err(|e| UpstreamError::Unreachable {
                details: e.to_string(),
            })?;

        debug!(status = %response.status(), "health probe answered");
        Ok(response.status().is_success())
    }
}

/// Pulls a human-readable message out of an error body.
///
/// Accepts `{"message": ..}` or `{"error": ..}`, preferring the first
/// non-blank one; anything else yields an empty string so the UI falls back
/// to its own wording.
fn error_message(body: &str) -> String {
    let Ok(body) = serde_json::from_str::<ErrorBody>(body) else {
        return String::new();
    };
    [body.message, body.error]
        .into_iter()
        .flatten()
        .map(|text| text.trim().to_string())
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode, routing::get, routing::post};
    use serde_json::{Value, json};

    async fn spawn_api(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve");
        });
        format!("http://{addr}/")
    }

    fn client(base_url: String) -> AdminApiClient {
        AdminApiClient::new(&AdminApiConfig {
            base_url,
            timeout_seconds: 2,
        })
        .expect("client")
    }

    async fn check_login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        match (body["email"].as_str(), body["password"].as_str()) {
            (Some("a@b.com"), Some("x")) => (StatusCode::OK, Json(json!({ "ok": true }))),
            _ => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Invalid credentials" })),
            ),
        }
    }

    #[test]
    fn error_message_reads_known_shapes() {
        assert_eq!(error_message(r#"{"message":"Invalid credentials"}"#), "Invalid credentials");
        assert_eq!(error_message(r#"{"error":"Usuário bloqueado"}"#), "Usuário bloqueado");
        assert_eq!(error_message("<html>oops</html>"), "");
        assert_eq!(error_message(r#"{"message":"  "}"#), "");
    }

    #[test]
    fn blank_message_falls_through_to_error() {
        assert_eq!(
            error_message(r#"{"message":"","error":"Usuário bloqueado"}"#),
            "Usuário bloqueado"
        );
        assert_eq!(
            error_message(r#"{"message":" ","error":" Conta suspensa "}"#),
            "Conta suspensa"
        );
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = client("http://api.local/admin/".to_string());
        assert_eq!(client.url("/health"), "http://api.local/admin/health");
    }

    #[tokio::test]
    async fn login_accepts_and_rejects() {
        let base = spawn_api(Router::new().route("/auth/login", post(check_login))).await;
        let client = client(base);

        client.login("a@b.com", "x").await.expect("accepted");

        let err = client.login("a@b.com", "nope").await.unwrap_err();
        assert_eq!(
            err,
            UpstreamError::Rejected {
                status: 401,
                message: "Invalid credentials".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn login_server_error_is_an_outage() {
        let base = spawn_api(Router::new().route(
            "/auth/login",
            post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        ))
        .await;

        let err = client(base).login("a@b.com", "x").await.unwrap_err();
        assert_eq!(err, UpstreamError::Unavailable { status: 503 });
    }

    #[tokio::test]
    async fn health_reflects_status() {
        let up = spawn_api(Router::new().route("/health", get(|| async { "ok" }))).await;
        assert!(client(up).health().await.expect("probe"));

        let down = spawn_api(Router::new().route(
            "/health",
            get(|| async { StatusCode::BAD_GATEWAY }),
        ))
        .await;
        assert!(!client(down).health().await.expect("probe"));
    }

    #[tokio::test]
    async fn unreachable_api_is_reported() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let err = client(format!("http://{addr}")).health().await.unwrap_err();
        assert!(matches!(err, UpstreamError::Unreachable { .. }));
    }
}
