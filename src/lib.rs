//! Setup engine for the `ocean` DigitalOcean CLI.
//!
//! A one-shot bootstrapper that provisions everything `ocean` needs to run:
//! the API token file, the Homebrew package manager, the Python interpreter,
//! the Python libraries `ocean` imports, and finally the `ocean` executable
//! itself copied onto the user's search path.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]**: fixed paths and package sets for a setup run
//! - **[`resources`]**: idempotent check + apply primitives (credential file, tools, libraries, artifact)
//! - **[`tasks`]**: named, sequential steps wired to resources
//! - **[`commands`]**: top-level orchestration of a full run

pub mod cli;
pub mod commands;
pub mod config;
pub mod credential;
pub mod error;
pub mod exec;
pub mod logging;
pub mod platform;
pub mod resources;
pub mod tasks;
