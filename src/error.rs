use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("File not found <{}>", .0.display())]
    NotFound(PathBuf, #[source] std::io::Error),
    #[error("Failed to decode JSON from <{}>", .0.display())]
    MalformedInput(PathBuf, #[source] serde_json::Error),
    #[error("Failed reading <{}>", .0.display())]
    Io(PathBuf, #[source] std::io::Error),
    #[error("Expected a JSON array of collaborators in <{}>", .0.display())]
    NotAnArray(PathBuf),
    #[error("Invalid collaborator #{index} in {repository}: {reason}")]
    SchemaViolation {
        repository: String,
        index: usize,
        reason: String,
    },
    #[error("Failed to create YAML file <{}>", .0.display())]
    WriteFailure(PathBuf, #[source] WriteError),
}

/// What went wrong when writing a YAML file.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("serialization error")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    pub fn read(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.into(), err)
        } else {
            Self::Io(path.into(), err)
        }
    }

    pub fn write(path: impl Into<PathBuf>, err: impl Into<WriteError>) -> Self {
        Self::WriteFailure(path.into(), err.into())
    }

    pub fn schema(repository: &str, index: usize, reason: impl ToString) -> Self {
        Self::SchemaViolation {
            repository: repository.to_string(),
            index,
            reason: reason.to_string(),
        }
    }
}
