//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid column id: {0}")]
    InvalidColumn(String),
}
