use std::fmt;

use serde::{Deserialize, Serialize};

/// Student identifier. The backend reports database rows with numeric ids,
/// but echoes the form's text id back when a student is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentId {
    Number(i64),
    Text(String),
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentId::Number(n) => write!(f, "{}", n),
            StudentId::Text(s) => f.write_str(s),
        }
    }
}

/// A student record as listed by `GET /students`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub department: String,
    pub email: String,
    #[serde(default)]
    pub last_active: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Student {
    /// Calendar date of the last activity, if the backend reported one.
    pub fn last_active_date(&self) -> Option<String> {
        let raw = self.last_active.as_deref()?;
        crate::api::parse_timestamp(raw)
            .ok()
            .map(|ts| ts.format("%Y-%m-%d").to_string())
    }
}

/// `POST /students` body: exactly the four form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub id: String,
    pub department: String,
    pub email: String,
}

/// `DELETE /students/{id}` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAck {
    pub deleted: StudentId,
}
