//! Analytics view model: turns the backend report into cards and chart rows.

use campus_types::{
    Result,
    analytics::AnalyticsReport,
    student::Student,
};

use crate::ports::AnalyticsPort;

/// Department slice colors, cycled by index
pub const DEPARTMENT_PALETTE: [[u8; 3]; 6] = [
    [0x8B, 0x5C, 0xF6],
    [0x3B, 0x82, 0xF6],
    [0x10, 0xB9, 0x81],
    [0xF5, 0x9E, 0x0B],
    [0xEF, 0x44, 0x44],
    [0xFB, 0xBF, 0x24],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentSlice {
    pub department: String,
    pub count: u64,
    /// Fraction of all listed students, 0.0..=1.0
    pub share: f32,
    pub color: [u8; 3],
}

/// One bar per recently active student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityBar {
    pub name: String,
    pub logins: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSummary {
    pub stats: Vec<StatCard>,
    pub departments: Vec<DepartmentSlice>,
    pub activity: Vec<ActivityBar>,
    pub recent: Vec<Student>,
}

impl AnalyticsSummary {
    pub fn from_report(report: AnalyticsReport) -> Self {
        let stats = vec![
            StatCard {
                title: "Total Students",
                value: report.total_students.to_string(),
            },
            StatCard {
                title: "Recently Onboarded",
                value: report.recent_students.len().to_string(),
            },
            StatCard {
                title: "Active Last 7 Days",
                value: report.active_last_7_days.len().to_string(),
            },
            // The backend has no history to compute growth from.
            StatCard {
                title: "Growth Rate",
                value: "N/A".to_string(),
            },
        ];

        let listed: u64 = report.by_department.iter().map(|d| d.count).sum();
        let departments = report
            .by_department
            .into_iter()
            .enumerate()
            .map(|(idx, dept)| DepartmentSlice {
                share: if listed == 0 {
                    0.0
                } else {
                    dept.count as f32 / listed as f32
                },
                department: dept.department,
                count: dept.count,
                color: DEPARTMENT_PALETTE[idx % DEPARTMENT_PALETTE.len()],
            })
            .collect();

        let activity = report
            .active_last_7_days
            .iter()
            .map(|s| ActivityBar {
                name: s.name.clone(),
                logins: 1,
            })
            .collect();

        Self {
            stats,
            departments,
            activity,
            recent: report.recent_students,
        }
    }
}

/// Loading state plus the last summary
#[derive(Debug, Clone, Default)]
pub struct AnalyticsView {
    summary: Option<AnalyticsSummary>,
    loading: bool,
}

impl AnalyticsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_loaded(&mut self, result: Result<AnalyticsReport>) {
        self.loading = false;
        match result {
            Ok(report) => self.summary = Some(AnalyticsSummary::from_report(report)),
            Err(e) => {
                log::error!("Failed to fetch analytics: {}", e);
                self.summary = None;
            }
        }
    }

    pub async fn load(&mut self, port: &dyn AnalyticsPort) {
        self.begin_load();
        let result = port.fetch_analytics().await;
        self.apply_loaded(result);
    }

    pub fn summary(&self) -> Option<&AnalyticsSummary> {
        self.summary.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
