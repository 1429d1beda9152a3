// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the examples and the harness catalog.

use crate::quartile::Quartile;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reported while checking a harness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    #[error("precondition [{lower}, {upper}] admits no value")]
    EmptyDomain { lower: i32, upper: i32 },

    #[error("harness `{harness}` ranges over {size} values, more than the limit of {limit}")]
    DomainTooLarge { harness: String, size: u64, limit: u64 },

    /// The postcondition failed for some input allowed by the precondition.
    #[error("harness `{harness}`: classifying {input} gave {actual}, expected {expected}")]
    Violation { harness: String, input: i32, expected: Quartile, actual: Quartile },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read harness catalog {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed harness catalog")]
    Parse(#[from] toml::de::Error),

    #[error("invalid harness `{name}`")]
    Harness {
        name: String,
        #[source]
        source: HarnessError,
    },

    #[error("harness `{0}` is declared more than once")]
    DuplicateHarness(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid log directive")]
    Directive(#[from] tracing_subscriber::filter::ParseError),

    #[error("a global logger is already installed")]
    AlreadyInitialized(#[from] tracing::subscriber::SetGlobalDefaultError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoopError {
    #[error("loop bound {bound} exceeds the maximum of {max}")]
    BoundExceeded { bound: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrBufError {
    #[error("failed to allocate a buffer of {length} bytes")]
    AllocFailed { length: usize },

    #[error("buffer of length {length} has no fifth character")]
    TooShort { length: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("no message left to receive")]
    Disconnected,

    #[error("received non-positive message {0}")]
    NonPositive(i32),

    #[error("message {0} cannot be incremented without overflow")]
    Overflow(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("element {index} overflows when incremented")]
    Overflow { index: usize },
}
