use std::path::PathBuf;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart isn't initialized")]
    NotInitialized,

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid chart config: {0}")]
    InvalidConfig(String),

    #[error("invalid settings form: {0}")]
    InvalidForm(String),

    #[error("no file selected")]
    EmptySelection,

    #[error("empty file: {}", .0.display())]
    EmptyFile(PathBuf),

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
