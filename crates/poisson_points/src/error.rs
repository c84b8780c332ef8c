//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Every
//! variant is a precondition violation reported before any sampling work is done, except
//! [`Error::SeedRejected`] which caps the first-point rejection loop.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no seed point satisfied the shape after {attempts} attempts")]
    SeedRejected { attempts: usize },
}
