//! User metrics: the one backend call this app makes, plus the small state
//! slice the metrics popup renders from.
//!
//! `GET {base}/api/users/getUserMetrics` with a bearer token.  Failures are
//! turned into a display string; there are no retries.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use super::event::AppEvent;

const METRICS_PATH: &str = "/api/users/getUserMetrics";

// ───────────────────────────────────────── wire types ────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetrics {
    pub total_words: u64,
    pub incomplete_words_count: u64,
    #[serde(default)]
    pub translations_per_language: Vec<LanguageCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    #[serde(rename = "_id")]
    pub language: String,
    pub count: u64,
}

impl UserMetrics {
    pub fn completed_words(&self) -> u64 {
        self.total_words.saturating_sub(self.incomplete_words_count)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

// ───────────────────────────────────────── errors ────────────

#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Non-2xx response.  `message` is already the best available text.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("unexpected metrics response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no API token configured (set api_token or LEXIREEL_API_TOKEN)")]
    MissingToken,
}

impl MetricsError {
    /// Text shown to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Pick the message for a failed response: the body's `message` field when
/// present, otherwise a generic description of the status.
fn api_failure_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

// ───────────────────────────────────────── client ────────────

#[derive(Debug, Clone)]
pub struct MetricsClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl MetricsClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{METRICS_PATH}", self.base_url.trim_end_matches('/'))
    }

    pub async fn fetch(&self) -> Result<UserMetrics, MetricsError> {
        let token = self.token.as_deref().ok_or(MetricsError::MissingToken)?;
        let url = self.endpoint();
        tracing::debug!(%url, "fetching user metrics");

        let response = self.http.get(&url).bearer_auth(token).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = api_failure_message(status, &body);
            tracing::warn!(status = status.as_u16(), %message, "metrics request failed");
            return Err(MetricsError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Run a fetch in the background and post the result as [`AppEvent::Metrics`].
pub fn spawn_fetch(client: MetricsClient, tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let result = client.fetch().await;
        let _ = tx.send(AppEvent::Metrics(result));
    });
}

// ───────────────────────────────────────── state slice ───────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricsStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug)]
pub enum MetricsAction {
    Pending,
    Fulfilled(UserMetrics),
    Rejected(String),
}

/// Last known metrics and request status.
#[derive(Debug, Default)]
pub struct MetricsState {
    pub status: MetricsStatus,
    pub data: Option<UserMetrics>,
    pub error: Option<String>,
    pub fetched_at: Option<DateTime<Local>>,
}

impl MetricsState {
    pub fn apply(&mut self, action: MetricsAction) {
        match action {
            MetricsAction::Pending => {
                self.status = MetricsStatus::Loading;
                self.error = None;
            }
            MetricsAction::Fulfilled(data) => {
                self.status = MetricsStatus::Loaded;
                self.data = Some(data);
                self.fetched_at = Some(Local::now());
            }
            MetricsAction::Rejected(message) => {
                // Previously loaded data stays visible under the error.
                self.status = MetricsStatus::Failed;
                self.error = Some(message);
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == MetricsStatus::Loading
    }
}

impl From<Result<UserMetrics, MetricsError>> for MetricsAction {
    fn from(result: Result<UserMetrics, MetricsError>) -> Self {
        match result {
            Ok(data) => MetricsAction::Fulfilled(data),
            Err(e) => MetricsAction::Rejected(e.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const SAMPLE: &str = r#"{
        "totalWords": 120,
        "incompleteWordsCount": 30,
        "translationsPerLanguage": [{"_id": "es", "count": 90}, {"_id": "fr", "count": 41}],
        "extra": true
    }"#;

    /// Serve one canned HTTP response and hand back the raw request text.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = sock.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            sock.write_all(response.as_bytes()).await.unwrap();
            sock.shutdown().await.ok();
            String::from_utf8_lossy(&request).into_owned()
        });
        (base, handle)
    }

    #[test]
    fn decodes_metrics_body() {
        let metrics: UserMetrics = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(metrics.total_words, 120);
        assert_eq!(metrics.completed_words(), 90);
        assert_eq!(
            metrics.translations_per_language[1],
            LanguageCount { language: "fr".into(), count: 41 }
        );
    }

    #[test]
    fn body_message_wins_for_api_failures() {
        let status = reqwest::StatusCode::UNAUTHORIZED;
        assert_eq!(
            api_failure_message(status, r#"{"message":"Token expired"}"#),
            "Token expired"
        );
        assert_eq!(
            api_failure_message(status, "<html>nope</html>"),
            "request failed with status 401 Unauthorized"
        );
        assert_eq!(
            api_failure_message(status, r#"{"message":"  "}"#),
            "request failed with status 401 Unauthorized"
        );
    }

    #[test]
    fn endpoint_joins_cleanly() {
        let client = MetricsClient::new("https://api.example.test/", None);
        assert_eq!(client.endpoint(), "https://api.example.test/api/users/getUserMetrics");
    }

    #[tokio::test]
    async fn fetch_sends_bearer_token() {
        let (base, server) = serve_once("200 OK", SAMPLE).await;
        let client = MetricsClient::new(base, Some("abc123".into()));
        let metrics = client.fetch().await.unwrap();
        assert_eq!(metrics.incomplete_words_count, 30);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/users/getUserMetrics "));
        assert!(request.to_ascii_lowercase().contains("authorization: bearer abc123"));
    }

    #[tokio::test]
    async fn fetch_surfaces_api_message() {
        let (base, _server) = serve_once("403 Forbidden", r#"{"message":"Not allowed"}"#).await;
        let client = MetricsClient::new(base, Some("t".into()));
        let err = client.fetch().await.unwrap_err();
        assert!(matches!(err, MetricsError::Api { status: 403, .. }));
        assert_eq!(err.user_message(), "Not allowed");
    }

    #[tokio::test]
    async fn fetch_reports_transport_errors() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = MetricsClient::new(base, Some("t".into())).fetch().await.unwrap_err();
        assert!(matches!(err, MetricsError::Transport(_)));
        assert!(!err.user_message().is_empty());
    }

    #[tokio::test]
    async fn missing_token_fails_without_request() {
        let err = MetricsClient::new("http://127.0.0.1:9", None).fetch().await.unwrap_err();
        assert!(matches!(err, MetricsError::MissingToken));
    }

    #[test]
    fn state_slice_transitions() {
        let mut state = MetricsState::default();
        state.apply(MetricsAction::Pending);
        assert!(state.is_loading());

        state.apply(MetricsAction::Fulfilled(serde_json::from_str(SAMPLE).unwrap()));
        assert_eq!(state.status, MetricsStatus::Loaded);
        assert!(state.fetched_at.is_some());

        state.apply(MetricsAction::Rejected("boom".into()));
        assert_eq!(state.status, MetricsStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(state.data.is_some());

        state.apply(MetricsAction::Pending);
        assert_eq!(state.error, None);
    }
}
