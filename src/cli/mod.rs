//! CLI support for rivulet-lang
//!
//! Provides programmatic access to the rivulet CLI functionality for
//! embedding in other tools.

mod run;

pub use run::{RenderOptions, execute_ast, execute_render, execute_tokens};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Lexer error
    Lex(crate::LexError),
    /// Parser error
    Parse(crate::ParseError),
    /// Renderer error
    Render(crate::RenderError),
    /// Rule table failed to compile
    Pattern(regex::Error),
    /// JSON serialization error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Lex(e) => write!(f, "Lex error: {}", e),
            CliError::Parse(e) => write!(f, "Parse error: {}", e),
            CliError::Render(e) => write!(f, "Render error: {}", e),
            CliError::Pattern(e) => write!(f, "Invalid rule table: {}", e),
            CliError::Json(e) => write!(f, "JSON error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => {
                write!(f, "No input provided. Pass an expression or pipe text to stdin.")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Lex(e) => Some(e),
            CliError::Parse(e) => Some(e),
            CliError::Render(e) => Some(e),
            CliError::Pattern(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::LexError> for CliError {
    fn from(e: crate::LexError) -> Self {
        CliError::Lex(e)
    }
}

impl From<crate::ParseError> for CliError {
    fn from(e: crate::ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<crate::RenderError> for CliError {
    fn from(e: crate::RenderError) -> Self {
        CliError::Render(e)
    }
}

impl From<regex::Error> for CliError {
    fn from(e: regex::Error) -> Self {
        CliError::Pattern(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
