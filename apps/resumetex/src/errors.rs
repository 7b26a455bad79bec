use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type.
///
/// Everything except `Compile` and `MissingArtifact` aborts the run before the
/// `.tex` file is written; those two are reported as warnings by the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse resume document {path}: {source}")]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Could not read template {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed: {message}")]
    Compile { program: String, message: String },

    #[error("Expected output {path} was not produced")]
    MissingArtifact { path: PathBuf },
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures of the external compiler, which never fail the run.
    pub fn is_compile_failure(&self) -> bool {
        matches!(
            self,
            AppError::Compile { .. } | AppError::MissingArtifact { .. }
        )
    }
}
