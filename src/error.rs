use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("collision map must have at least one bucket")]
    EmptyCollisionMap,
    #[error("unknown hash function: {0}")]
    UnknownHash(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
