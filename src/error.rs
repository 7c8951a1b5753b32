//! Runtime failure modes.
//!
//! The runtime itself can fail in exactly two ways: a compiler-inserted
//! hole terminates the program abruptly (see [`crate::engine::hole`]),
//! and a suspension that escapes every handler surfaces here. Every
//! other error a source program can express is encoded by its compiler
//! as an ordinary suspension targeting a user-defined prompt.

use crate::engine::Prompt;
use std::fmt;

/// Errors surfaced by the top-level driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// A suspension reached the top level without meeting its prompt.
    UnhandledPrompt { prompt: Prompt },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::UnhandledPrompt { prompt } => {
                write!(f, "unhandled prompt {}", prompt)
            }
        }
    }
}

impl std::error::Error for RuntimeError {}

/// Result alias used across the runtime surface.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
