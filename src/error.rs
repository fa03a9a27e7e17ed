//! Crate error type.
//!
//! Collection never fails hard: metric failures degrade into absent snapshot
//! fields. The error type only covers the terminal and IO boundary of the
//! dashboard loop itself.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal io: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
