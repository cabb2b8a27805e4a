use std::fmt::{Display, Formatter};
use std::io;
use std::sync::PoisonError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    IO(io::Error),
    Terminal(&'static str),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IO(e) => write!(f, "io error: {}", e),
            Self::Terminal(s) => write!(f, "terminal error: {}", s),
        }
    }
}

impl std::error::Error for AppError {}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        Self::IO(err)
    }
}

impl<T> From<PoisonError<T>> for AppError {
    fn from(_: PoisonError<T>) -> Self {
        Self::Terminal("input buffer lock poisoned")
    }
}
