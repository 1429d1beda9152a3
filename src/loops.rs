// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loops need an unwinding bound. With a fixed array the bound is obvious;
//! with an input-dependent length the harness has to assume one.

use crate::error::LoopError;

pub const ARRAY_LEN: usize = 10;
/// Largest length [`zeroed`] accepts.
pub const MAX_BOUND: usize = 10;

// ANCHOR: code
pub fn zero_fill(buffer: &mut [u32]) {
    for slot in buffer.iter_mut() {
        *slot = 0;
    }
}
// ANCHOR_END: code

pub fn zeroed_array() -> [u32; ARRAY_LEN] {
    let mut array = [u32::MAX; ARRAY_LEN];
    zero_fill(&mut array);
    array
}

/// A vector of `bound` zeros.
pub fn zeroed(bound: usize) -> Result<Vec<u32>, LoopError> {
    if bound > MAX_BOUND {
        return Err(LoopError::BoundExceeded { bound, max: MAX_BOUND });
    }
    let mut buffer = vec![u32::MAX; bound];
    zero_fill(&mut buffer);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fixed_array() {
        assert_eq!(zeroed_array(), [0; ARRAY_LEN]);
    }

    #[test]
    fn every_bound() {
        for bound in 0..=MAX_BOUND {
            let buffer = zeroed(bound).unwrap();
            assert_eq!(buffer.len(), bound);
            assert!(buffer.iter().all(|&x| x == 0));
        }
    }

    #[test]
    fn bound_too_large() {
        assert_eq!(zeroed(MAX_BOUND + 1), Err(LoopError::BoundExceeded { bound: 11, max: 10 }));
    }

    proptest! {
        #[test]
        fn fill_clears_everything(mut buffer in proptest::collection::vec(any::<u32>(), 0..64)) {
            zero_fill(&mut buffer);
            prop_assert!(buffer.iter().all(|&x| x == 0));
        }
    }
}

// ANCHOR: kani
#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(11)]
    fn check_zeroed_array() {
        let array = zeroed_array();
        for i in 0..ARRAY_LEN {
            assert!(array[i] == 0);
        }
    }

    #[kani::proof]
    #[kani::unwind(11)]
    fn check_zeroed_bounded() {
        let bound: usize = kani::any();
        kani::assume(bound <= MAX_BOUND);
        let buffer = zeroed(bound).unwrap();
        assert!(buffer.len() == bound);
        for i in 0..bound {
            assert!(buffer[i] == 0);
        }
    }

    #[kani::proof]
    fn check_zeroed_rejects_large_bound() {
        let bound: usize = kani::any();
        kani::assume(bound > MAX_BOUND);
        assert!(zeroed(bound).is_err());
    }
}
// ANCHOR_END: kani
