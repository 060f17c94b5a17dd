//! Errors.
use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The host could not fully traverse a resource delta.
    #[error("could not traverse resource delta: {0}")]
    Traversal(String),

    /// The global logger could not be installed.
    #[error("could not enable logging: {0}")]
    Logging(String),
}

pub type Result<T = ()> = StdResult<T, Error>;
