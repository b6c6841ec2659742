pub mod config;
pub mod conversation;
pub mod service;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ConfabError {
    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Channel error: {0}")]
    ChannelError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Wire format error: {0}")]
    WireError(String),
}

impl ConfabError {
    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Transient service hiccups leave the session in its last applied state
            ConfabError::ServiceError(_) => true,
            // Channel errors mean the connection plumbing is gone
            ConfabError::ChannelError(_) => false,
            // Config errors require user intervention
            ConfabError::ConfigError(_) => false,
            // Malformed wire payloads are skipped, the stream continues
            ConfabError::WireError(_) => true,
        }
    }

    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            ConfabError::ServiceError(_) => {
                "Dialogue service error. Please try again.".to_string()
            }
            ConfabError::ChannelError(_) => {
                "Lost connection to the dialogue service. Please restart the application."
                    .to_string()
            }
            ConfabError::ConfigError(_) => {
                "Configuration error. Please check settings.".to_string()
            }
            ConfabError::WireError(_) => {
                "Received an unreadable message from the service.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfabError>;
