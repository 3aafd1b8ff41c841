use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("The parking spot {0} does not exist")]
    UnknownSpot(String),
    #[error("The parking spot {0} is full")]
    SpotFull(String),
}
