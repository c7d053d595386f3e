use thiserror::Error;

#[derive(Error, Debug)]
pub enum VolumesError {
    #[error("No token found. Please run 'volumes auth --token <TOKEN>' to configure.")]
    TokenNotFound,

    #[error("{0}")]
    ConfigConflict(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    FetchFailure(String),

    #[error("resource type chain exceeds the maximum nesting depth of {0}")]
    DescriptorTooDeep(usize),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    Context(String),
}

pub type VolumesResult<T> = Result<T, VolumesError>;

/// Attach a description of what was being attempted to a lower-level error.
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> VolumesResult<T>;
    fn with_context<F>(self, f: F) -> VolumesResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> VolumesResult<T> {
        self.map_err(|e| VolumesError::Context(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> VolumesResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| VolumesError::Context(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> VolumesResult<T> {
        self.ok_or_else(|| VolumesError::Context(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> VolumesResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| VolumesError::Context(f()))
    }
}
