pub mod auth;
pub mod feedback;
pub mod gemini;
pub mod menu;
pub mod report;
pub mod sheets;
pub mod vote;
