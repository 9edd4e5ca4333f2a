use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Word2VecError {
    #[error("Failed to read model file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed model file: {0}")]
    Format(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Word2VecResult<T> = Result<T, Word2VecError>;

impl Word2VecError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Word2VecError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<tokio::task::JoinError> for Word2VecError {
    fn from(err: tokio::task::JoinError) -> Self {
        Word2VecError::Internal(format!("Load task failed: {}", err))
    }
}

impl From<Word2VecError> for tonic::Status {
    fn from(err: Word2VecError) -> Self {
        match err {
            Word2VecError::Io { .. } | Word2VecError::Format(_) => {
                tonic::Status::unavailable(err.to_string())
            }
            Word2VecError::Config(msg) => {
                tonic::Status::failed_precondition(format!("Config error: {}", msg))
            }
            Word2VecError::Internal(msg) => tonic::Status::internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_message() {
        let err = Word2VecError::Format("line 3: expected 4 components, found 2".into());
        assert_eq!(
            err.to_string(),
            "Malformed model file: line 3: expected 4 components, found 2"
        );
    }

    #[test]
    fn test_config_maps_to_failed_precondition() {
        let status: tonic::Status = Word2VecError::Config("missing model path".into()).into();
        assert_eq!(status.code(), tonic::Code::FailedPrecondition);
        assert!(status.message().contains("missing model path"));
    }

    #[test]
    fn test_io_maps_to_unavailable() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let status: tonic::Status = Word2VecError::io("/tmp/model.bin", source).into();
        assert_eq!(status.code(), tonic::Code::Unavailable);
        assert!(status.message().contains("/tmp/model.bin"));
    }
}
