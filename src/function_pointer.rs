// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calling through a function pointer chosen by an arbitrary flag.

pub fn alpha(x: i32) -> Option<i32> {
    x.checked_add(1)
}

pub fn beta(x: i32) -> Option<i32> {
    x.checked_add(2)
}

pub fn select(choose_alpha: bool) -> fn(i32) -> Option<i32> {
    if choose_alpha {
        alpha
    } else {
        beta
    }
}


// ANCHOR: kani
#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn check_function_pointer() {
        let function = select(kani::any());
        let x: i32 = kani::any();
        if let Some(rc) = function(x) {
            assert!(rc == x + 1 || rc == x + 2);
        }
        kani::cover!(function(x).is_none());
    }
}
// ANCHOR_END: kani
