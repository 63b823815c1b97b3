use std::fmt;

#[derive(Debug)]
pub enum Error {
    IoError(std::io::Error),
    WorkerFailure(String),
    InvalidWorkerCount(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::WorkerFailure(msg) => write!(f, "Worker Failure: {}", msg),
            Error::InvalidWorkerCount(count) => {
                write!(f, "Invalid Worker Count: {} (must be at least 1)", count)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}
