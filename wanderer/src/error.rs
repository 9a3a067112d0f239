//! Error types for the maze wanderer.
//!
//! The per-tick runtime never fails; these errors only surface while
//! loading configuration, building the transition table, or accepting
//! untyped events from outside the agent.

/// Result type alias
pub type Result<T> = std::result::Result<T, WandererError>;

/// Maze wanderer error types
#[derive(Debug, thiserror::Error)]
pub enum WandererError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transition table is ambiguous or incomplete
    #[error("Transition table error: {0}")]
    TransitionTable(String),

    /// Event payload does not match the shape its name requires
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    /// Simulator maze description is malformed
    #[error("Maze error: {0}")]
    Maze(String),
}

impl From<toml::de::Error> for WandererError {
    fn from(e: toml::de::Error) -> Self {
        WandererError::Config(e.to_string())
    }
}
