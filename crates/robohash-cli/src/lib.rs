#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary entry point only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod request_args;

// Re-export primary types for convenient access
pub use bootstrap::{bootstrap, client_config};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
pub use request_args::{RequestArgs, Size};
