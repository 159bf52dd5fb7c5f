//! # Stamp - Render Templates from Map Files
//!
//! `stamp` renders a MiniJinja template against data read from a key/value
//! map file and delivers the result to one of three sinks:
//!
//! - a file (default, `<template name>.html` or `--output`)
//! - standard output (`--stdout`)
//! - a local preview server on `127.0.0.1:8080` that re-renders on every
//!   request (`--httpd`)
//!
//! The binary is a thin wrapper around [`run`]; the pieces are usable on
//! their own:
//!
//! - [`Cli`]: clap argument definition
//! - [`Config`]: immutable, validated configuration
//! - [`OutputDispatcher`]: picks the sink and renders
//! - [`PreviewServer`]: the axum-based live preview
//! - [`AppError`]: failures with stable exit codes

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod server;

use std::sync::Arc;

use stamp_render::MiniJinjaLoader;

pub use cli::Cli;
pub use config::{Config, Mode, ServerConfig, DEFAULT_ADDR};
pub use dispatch::{build_data, OutputDispatcher};
pub use error::AppError;
pub use server::{PreviewServer, INCLUDE_PREFIX};

/// Resolves the configuration for parsed arguments and dispatches it.
pub fn run(cli: &Cli) -> Result<(), AppError> {
    let config = Config::from_cli(cli)?;
    let loader = MiniJinjaLoader::with_options(config.load_options);
    OutputDispatcher::new(Arc::new(loader)).dispatch(&config)
}
