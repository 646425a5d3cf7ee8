// src/error.rs
//! Error types for the session layer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("pagination session is closed")]
    Closed,
    #[error("pagination worker failed: {0}")]
    Worker(String),
}
