#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("generation failed: {0}")]
    Generation(String),

    #[error("generation returned an unusable result: {0}")]
    EmptyResult(String),

    #[error("precondition violated: {0}")]
    Precondition(String),

    #[error("already in progress: {0}")]
    InFlight(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

impl Error {
    /// Unusable gateway output counts as a failed generation.
    pub fn is_generation_failure(&self) -> bool {
        matches!(self, Error::Generation(_) | Error::EmptyResult(_))
    }

    pub fn is_retryable(&self) -> bool {
        self.is_generation_failure() || matches!(self, Error::InFlight(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! precondition {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Precondition(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Precondition(format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! generation {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Generation(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Generation(format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! empty {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::EmptyResult(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::EmptyResult(format!($fmt, $($arg)*)))
    };
}
