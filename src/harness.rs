// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Harnesses for the quartile classifier.
//!
//! A harness restricts the input to a precondition range and asserts that
//! every input in that range gets the same expected label. Under Kani the
//! range is explored symbolically (see the proofs in [`crate::quartile`]);
//! here the range is small enough to enumerate, so the check runs
//! concretely and reports the first input that breaks the postcondition.

use crate::error::HarnessError;
use crate::quartile::{quartile, Quartile};
use std::ops::RangeInclusive;
use tracing::{debug, instrument, trace, warn};

/// Default cap on the number of inputs a single harness may enumerate.
pub const DEFAULT_LIMIT: u64 = 1 << 16;

/// Inclusive range of inputs a harness is allowed to pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precondition {
    lower: i32,
    upper: i32,
}

impl Precondition {
    pub fn new(lower: i32, upper: i32) -> Result<Self, HarnessError> {
        if lower > upper {
            return Err(HarnessError::EmptyDomain { lower, upper });
        }
        Ok(Precondition { lower, upper })
    }

    pub fn lower(&self) -> i32 {
        self.lower
    }

    pub fn upper(&self) -> i32 {
        self.upper
    }

    pub fn contains(&self, x: i32) -> bool {
        self.lower <= x && x <= self.upper
    }

    pub fn values(&self) -> RangeInclusive<i32> {
        self.lower..=self.upper
    }

    /// Number of admitted inputs. Never zero.
    pub fn len(&self) -> u64 {
        (i64::from(self.upper) - i64::from(self.lower) + 1) as u64
    }

    /// Always `false`: `new` rejects ranges without a value.
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessSpec {
    pub name: String,
    pub precondition: Precondition,
    pub expected: Quartile,
}

/// Outcome of a harness that held for every admitted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessReport {
    pub name: String,
    pub checked: u64,
}

impl HarnessSpec {
    pub fn new(
        name: impl Into<String>,
        lower: i32,
        upper: i32,
        expected: Quartile,
    ) -> Result<Self, HarnessError> {
        let precondition = Precondition::new(lower, upper)?;
        Ok(HarnessSpec { name: name.into(), precondition, expected })
    }

    pub fn check(&self, limit: u64) -> Result<HarnessReport, HarnessError> {
        self.check_with(limit, quartile)
    }

    /// Run `classify` on every input of the precondition and compare each
    /// label against the expected one.
    #[instrument(level = "debug", skip_all, fields(harness = %self.name))]
    pub fn check_with<F>(&self, limit: u64, classify: F) -> Result<HarnessReport, HarnessError>
    where
        F: Fn(i32) -> Quartile,
    {
        let size = self.precondition.len();
        if size > limit {
            return Err(HarnessError::DomainTooLarge { harness: self.name.clone(), size, limit });
        }

        debug!(
            lower = self.precondition.lower,
            upper = self.precondition.upper,
            expected = %self.expected,
            "checking harness"
        );
        for input in self.precondition.values() {
            let actual = classify(input);
            trace!(input, %actual);
            if actual != self.expected {
                warn!(input, %actual, expected = %self.expected, "postcondition violated");
                return Err(HarnessError::Violation {
                    harness: self.name.clone(),
                    input,
                    expected: self.expected,
                    actual,
                });
            }
        }
        debug!(checked = size, "harness holds");
        Ok(HarnessReport { name: self.name.clone(), checked: size })
    }
}

/// One harness per band plus an out-of-range window on each side of `[0, 99]`.
pub fn standard_harnesses() -> Vec<HarnessSpec> {
    let spec = |name: &str, lower, upper, expected| HarnessSpec {
        name: name.to_string(),
        precondition: Precondition { lower, upper },
        expected,
    };
    vec![
        spec("below_range", -100, -1, Quartile::OutOfRange),
        spec("first_quartile", 0, 24, Quartile::Q1),
        spec("second_quartile", 25, 49, Quartile::Q2),
        spec("third_quartile", 50, 74, Quartile::Q3),
        spec("fourth_quartile", 75, 99, Quartile::Q4),
        spec("above_range", 100, 199, Quartile::OutOfRange),
    ]
}
