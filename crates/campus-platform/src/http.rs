//! HTTP adapter for the campus backend.
//!
//! Implements every campus-core port against the backend's JSON routes.
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use campus_core::ports::*;
use campus_types::{
    DashboardError, Result,
    analytics::AnalyticsReport,
    api::{ChatReply, ChatRequest, ConversationHistory, ConversationList},
    config::{DashboardConfig, Endpoints},
    conversation::ConversationId,
    student::{DeleteAck, NewStudent, Student, StudentId},
};

/// Client for the campus backend. Cheap to rebuild when the base URL changes.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    endpoints: Endpoints,
}

impl HttpBackend {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            endpoints: config.endpoints(),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;
        read_json(response).await
    }
}

/// Decode a successful response, or turn a failed one into `DashboardError::Http`.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(http_error(status, &body));
    }
    response
        .json()
        .await
        .map_err(|e| DashboardError::Serialization(e.to_string()))
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Value,
}

/// Build the error for a non-success status. Uses the backend's `detail`
/// field when the body carries one.
pub fn http_error(status: u16, body: &str) -> DashboardError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Value::String(detail),
        }) => detail,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) if body.trim().is_empty() => "unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    };
    DashboardError::Http { status, message }
}

// ─── Chat ────────────────────────────────────────────────────

#[async_trait(?Send)]
impl ChatBackendPort for HttpBackend {
    async fn list_conversations(&self) -> Result<Vec<ConversationId>> {
        let list: ConversationList = self.get_json(&self.endpoints.conversations()).await?;
        log::debug!("Backend lists {} conversations", list.conversation_ids.len());
        Ok(list.conversation_ids)
    }

    async fn fetch_conversation(&self, id: &ConversationId) -> Result<ConversationHistory> {
        self.get_json(&self.endpoints.conversation(id)).await
    }

    async fn send_message(&self, req: ChatRequest) -> Result<ChatReply> {
        let response = Request::post(&self.endpoints.chat())
            .json(&req)
            .map_err(|e| DashboardError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;
        read_json(response).await
    }
}

// ─── Students ────────────────────────────────────────────────

#[async_trait(?Send)]
impl StudentServicePort for HttpBackend {
    async fn list_students(&self) -> Result<Vec<Student>> {
        self.get_json(&self.endpoints.students()).await
    }

    async fn create_student(&self, student: NewStudent) -> Result<Student> {
        let response = Request::post(&self.endpoints.students())
            .json(&student)
            .map_err(|e| DashboardError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;
        let created: Student = read_json(response).await?;
        log::info!("Created student {}", created.id);
        Ok(created)
    }

    async fn delete_student(&self, id: &StudentId) -> Result<()> {
        let response = Request::delete(&self.endpoints.student(id))
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;
        let ack: DeleteAck = read_json(response).await?;
        log::info!("Deleted student {}", ack.deleted);
        Ok(())
    }
}

// ─── Analytics ───────────────────────────────────────────────

#[async_trait(?Send)]
impl AnalyticsPort for HttpBackend {
    async fn fetch_analytics(&self) -> Result<AnalyticsReport> {
        self.get_json(&self.endpoints.analytics()).await
    }
}
