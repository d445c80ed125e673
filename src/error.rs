use thiserror::Error;

use crate::domain::ComplexityKind;

/// Every failure surfaced by the library and the `bigo` binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad sampling plan or candidate list; raised before any measurement.
    #[error("configuration error: {0}")]
    Config(String),

    /// The callable under test failed; remaining sizes are not measured.
    #[error("measurement failed at n={size}: {source}")]
    Measurement {
        size: u64,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A model could not be fitted to the observations.
    #[error("ill-posed fit for {model}: {reason}")]
    IllPosed { model: ComplexityKind, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        AppError::Config(message.into())
    }

    pub fn ill_posed(model: ComplexityKind, reason: impl Into<String>) -> Self {
        AppError::IllPosed {
            model,
            reason: reason.into(),
        }
    }

    /// Process exit code used by the binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) | AppError::Io(_) | AppError::Json(_) => 2,
            AppError::Measurement { .. } => 3,
            AppError::IllPosed { .. } => 4,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_error_class() {
        assert_eq!(AppError::config("empty").exit_code(), 2);
        assert_eq!(AppError::ill_posed(ComplexityKind::Linear, "n=1").exit_code(), 4);

        let err = AppError::Measurement {
            size: 10,
            source: "boom".into(),
        };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "measurement failed at n=10: boom");
    }
}
