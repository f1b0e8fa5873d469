//! Student roster: the list behind the students table.

use campus_types::{
    Result,
    student::{Student, StudentId},
};

use crate::ports::StudentServicePort;

#[derive(Debug, Clone, Default)]
pub struct StudentRoster {
    students: Vec<Student>,
    search: String,
    loading: bool,
}

impl StudentRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// A failed load leaves the roster empty.
    pub fn apply_loaded(&mut self, result: Result<Vec<Student>>) {
        self.loading = false;
        match result {
            Ok(students) => {
                log::info!("Loaded {} students", students.len());
                self.students = students;
            }
            Err(e) => {
                log::error!("Failed to fetch students: {}", e);
                self.students.clear();
            }
        }
    }

    pub async fn load(&mut self, port: &dyn StudentServicePort) {
        self.begin_load();
        let result = port.list_students().await;
        self.apply_loaded(result);
    }

    /// The row disappears only once the backend confirms the delete.
    pub fn apply_deleted(&mut self, id: &StudentId, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => {
                self.remove(id);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to delete student {}: {}", id, e);
                Err(e)
            }
        }
    }

    pub async fn delete(&mut self, port: &dyn StudentServicePort, id: &StudentId) -> Result<()> {
        let result = port.delete_student(id).await;
        self.apply_deleted(id, result)
    }

    pub fn remove(&mut self, id: &StudentId) -> bool {
        let before = self.students.len();
        self.students.retain(|s| s.id != *id);
        self.students.len() != before
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut String {
        &mut self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Case-insensitive match of the search term against name, email and
    /// department.
    pub fn filtered(&self) -> Vec<&Student> {
        let term = self.search.trim().to_lowercase();
        self.students
            .iter()
            .filter(|s| {
                term.is_empty()
                    || s.name.to_lowercase().contains(&term)
                    || s.email.to_lowercase().contains(&term)
                    || s.department.to_lowercase().contains(&term)
            })
            .collect()
    }
}
