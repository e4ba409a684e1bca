pub mod archiver;
pub mod cli;
pub mod commands;
pub mod config;
pub mod fetcher;
pub mod logging;
pub mod mapping;
pub mod models;
pub mod parser;
pub mod reconciler;
pub mod renderer;
pub mod slug;
