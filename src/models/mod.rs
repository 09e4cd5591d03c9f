pub mod auth;
pub mod feedback;
pub mod menu;
pub mod report;
