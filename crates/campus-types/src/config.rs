use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::conversation::ConversationId;
use crate::student::StudentId;
use crate::DashboardError;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Everything but RFC 3986 unreserved characters is escaped in ids that
/// land in a path.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Top-level dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the campus backend, without a trailing slash
    pub api_base: String,
    /// Delay before returning to the student list after a successful add
    pub redirect_delay_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            redirect_delay_ms: 1500,
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> crate::Result<()> {
        let base = self.api_base.trim();
        if base.is_empty() {
            return Err(DashboardError::Config("API base URL is empty".to_string()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(DashboardError::Config(format!(
                "API base URL must start with http:// or https://: {}",
                base
            )));
        }
        Ok(())
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.api_base)
    }
}

/// URL builder for every backend route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn conversations(&self) -> String {
        format!("{}/conversations", self.base)
    }

    pub fn conversation(&self, id: &ConversationId) -> String {
        format!("{}/conversations/{}", self.base, segment(id.as_str()))
    }

    pub fn chat(&self) -> String {
        format!("{}/chat", self.base)
    }

    pub fn students(&self) -> String {
        format!("{}/students", self.base)
    }

    pub fn student(&self, id: &StudentId) -> String {
        format!("{}/students/{}", self.base, segment(&id.to_string()))
    }

    pub fn analytics(&self) -> String {
        format!("{}/analytics", self.base)
    }
}

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}
