pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod models;
pub mod report;
pub mod store;
