// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Toast operations themselves never fail (unknown ids are no-ops); errors
//! only come from reading and writing the configuration file.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config Error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
