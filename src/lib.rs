pub mod app;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;
pub mod session;
