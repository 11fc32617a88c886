// standard library
use std::path::PathBuf;

// internal crates
use crate::errors::{ErrorKind, Trace};

#[derive(Debug, thiserror::Error)]
#[error("failed to read configuration file '{}': {source}", .path.display())]
pub struct ReadFileErr {
    pub path: PathBuf,
    pub source: std::io::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for ReadFileErr {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Value
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed to parse configuration file '{}': {source}", .path.display())]
pub struct ParseFileErr {
    pub path: PathBuf,
    pub source: serde_json::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for ParseFileErr {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Type
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigErr {
    #[error(transparent)]
    ReadFileErr(ReadFileErr),
    #[error(transparent)]
    ParseFileErr(ParseFileErr),
}

crate::impl_error!(ConfigErr {
    ReadFileErr,
    ParseFileErr,
});
