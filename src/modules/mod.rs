pub mod auth;
pub mod platform;
pub mod project;
