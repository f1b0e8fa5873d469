pub mod sidebar;
pub mod chat;
pub mod students;
pub mod add_student;
pub mod analytics;
pub mod settings;
