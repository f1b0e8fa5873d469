pub mod conversation;
pub mod message;
pub mod api;
pub mod student;
pub mod analytics;
pub mod event;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::{DashboardError, ValidationError};
pub type Result<T> = std::result::Result<T, DashboardError>;
