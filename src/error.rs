use std::path::PathBuf;

use thiserror::Error;

pub type StoryResult<T> = Result<T, StoryError>;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("render backend failure: {0}")]
    Backend(String),

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Fatal dataset failures. Nothing can be rendered once one of these occurs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("malformed `{field}` value `{value}` on line {line}")]
    Malformed {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("dataset contains no plausible records")]
    Empty,
}
