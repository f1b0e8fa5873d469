use serde::{Deserialize, Serialize};

use crate::student::Student;

/// `GET /analytics`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub total_students: u64,
    #[serde(default)]
    pub by_department: Vec<DepartmentCount>,
    #[serde(default)]
    pub recent_students: Vec<Student>,
    #[serde(default)]
    pub active_last_7_days: Vec<Student>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: u64,
}
