use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RaceError {
    #[error("{0}")]
    InvalidArguments(String),
}

pub type RaceResult<T> = Result<T, RaceError>;
