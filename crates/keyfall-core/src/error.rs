use thiserror::Error;

/// Identifiers that arrive as strings from the host and fall outside the
/// closed set the engine understands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VizError {
    #[error("unknown visualization mode `{0}`")]
    UnknownVisualization(String),
    #[error("unknown visualization icon `{0}`")]
    UnknownIcon(String),
    #[error("unknown hand `{0}`")]
    UnknownHand(String),
}

pub type Result<T> = std::result::Result<T, VizError>;
