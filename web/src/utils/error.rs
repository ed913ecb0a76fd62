use thiserror::Error;

use beagle_proto::prelude::ProtoError;

/// Why the graph could not be shown.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("page location is not available")]
    Location,

    #[error("request failed: {0}")]
    Network(String),

    #[error("server answered {status} for {path}")]
    Http { status: u16, path: String },

    #[error("not a Beagle graph: {0}")]
    Document(String),
}

impl AppError {
    /// Short heading for the error panel.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::Http { status: 404, .. } => "Graph not found",
            AppError::Document(_) => "Unreadable graph",
            _ => "Failed to load graph",
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<ProtoError> for AppError {
    fn from(err: ProtoError) -> Self {
        AppError::Document(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
