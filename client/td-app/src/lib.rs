//! td-app
//!
//! Wiring for the `td` binary: CLI definitions, logger setup, and `App`,
//! which runs one command against an auth machine and reports the screen
//! the user ends up on.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod report;

pub use app::App;
pub use cli::Cli;
pub use commands::{Commands, Credentials, ProfileArgs, parse_link};
pub use error::{AppError, Result};
pub use report::Report;
