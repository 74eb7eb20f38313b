mod app;
pub mod commands;
pub mod config;
pub mod controller;
pub mod effects;
pub mod render;

pub use app::run_app;
