pub mod ports;
pub mod directory;
pub mod message_log;
pub mod session;
pub mod students;
pub mod validation;
pub mod analytics;
pub mod event_bus;
