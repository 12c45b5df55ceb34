//! Error types for VoiceFall

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoiceFallError {
    #[error("Ownership error: {0}")]
    Ownership(String),

    #[error("Replication error: {0}")]
    Replication(String),
}

pub type Result<T> = std::result::Result<T, VoiceFallError>;
