// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callers whose correctness depends on a library function's behavior.
//!
//! `beta1` only holds if `alpha1` is replaced by the identity, which is what
//! the stubbed harness does. `Counter` keeps the hidden state that makes
//! `beta2` hold on the first call and fail afterwards.

pub fn alpha1(a: i32) -> i32 {
    a.wrapping_add(1)
}

/// Whether `alpha1` left `b` unchanged.
pub fn beta1(b: i32) -> bool {
    alpha1(b) == b
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counter {
    count: i32,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn alpha2(&mut self, a: i32) -> i32 {
        self.count = self.count.wrapping_add(1);
        a.wrapping_add(self.count)
    }

    /// Whether `alpha2` added exactly one to `b`.
    pub fn beta2(&mut self, b: i32) -> bool {
        self.alpha2(b) == b.wrapping_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn counter_state_leaks_into_second_call() {
        let mut counter = Counter::new();
        assert!(counter.beta2(7));
        assert!(!counter.beta2(7));
        assert_eq!(counter.count(), 2);
    }

    proptest! {
        #[test]
        fn beta1_fails_without_stub(b: i32) {
            prop_assert!(!beta1(b));
        }

        #[test]
        fn beta2_holds_on_fresh_counter(b: i32) {
            prop_assert!(Counter::new().beta2(b));
        }
    }
}

// ANCHOR: kani
#[cfg(kani)]
mod verification {
    use super::*;

    fn identity(a: i32) -> i32 {
        a
    }

    #[kani::proof]
    #[kani::stub(alpha1, identity)]
    fn check_beta1_with_stub() {
        let b: i32 = kani::any();
        assert!(beta1(b));
    }

    #[kani::proof]
    fn check_beta2_first_call() {
        let mut counter = Counter::new();
        let b: i32 = kani::any();
        assert!(counter.beta2(b));
    }
}
// ANCHOR_END: kani
