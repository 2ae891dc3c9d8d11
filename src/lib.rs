pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod utils;
