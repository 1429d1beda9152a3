// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small verification examples.
//!
//! The centerpiece is [`quartile()`], a classifier that maps every `i32` to
//! one of five labels, together with the [`harness`] pattern used to check
//! it: restrict the input with a precondition, then assert the label. The
//! remaining modules are short examples of the pitfalls such harnesses catch
//! (loop bounds, out-of-bounds reads, hidden library state, environment
//! models and function pointers).
//!
//! Each module carries Kani proof harnesses under `cfg(kani)` and the
//! equivalent concrete and property-based tests under `cfg(test)`.

pub mod buffer;
pub mod config;
pub mod error;
pub mod function_pointer;
pub mod harness;
pub mod library;
pub mod loops;
pub mod network;
pub mod quartile;
pub mod session;
pub mod strbuf;
pub mod vector;

pub use config::Catalog;
pub use error::{ConfigError, HarnessError, SessionError};
pub use harness::{HarnessReport, HarnessSpec, Precondition};
pub use quartile::{classify, quartile, Quartile};
