//! Domain-specific error types for the setup engine.
//!
//! Typed errors built with [`thiserror`]. Resource code returns these and
//! command handlers at the CLI boundary convert them to [`anyhow::Error`]
//! via the standard `?` operator.

use thiserror::Error;

/// Errors that arise while obtaining or persisting the API token.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// Reading the token from standard input failed.
    #[error("failed to read token from stdin: {0}")]
    Prompt(#[source] std::io::Error),

    /// Writing the credential file failed.
    #[error("writing credential file {path}: {source}")]
    Persist {
        /// Path of the credential file that could not be written.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise while installing tools or libraries.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// A tool installation command failed.
    #[error("installing {tool} failed: {reason}")]
    ToolInstall {
        /// Name of the tool that could not be installed.
        tool: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// Installing libraries from the requirements manifest failed.
    #[error("installing libraries from {manifest} failed: {reason}")]
    LibraryInstall {
        /// Path of the requirements manifest.
        manifest: String,
        /// Human-readable reason for the failure.
        reason: String,
    },
}
