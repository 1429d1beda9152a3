// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incrementing a vector without running past its end.

use crate::error::VectorError;

pub const LENGTH: usize = 2;

pub fn init(vector: &mut [i32]) {
    vector.fill(0);
}

// ANCHOR: code
pub fn increment_all(vector: &mut [i32]) -> Result<(), VectorError> {
    for (index, value) in vector.iter_mut().enumerate() {
        *value = value.checked_add(1).ok_or(VectorError::Overflow { index })?;
    }
    Ok(())
}
// ANCHOR_END: code

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_then_increment() {
        let mut vector = [7; LENGTH];
        init(&mut vector);
        increment_all(&mut vector).unwrap();
        assert_eq!(vector, [1; LENGTH]);
    }

    #[test]
    fn overflow_reports_index() {
        let mut vector = [0, i32::MAX, 5];
        assert_eq!(increment_all(&mut vector), Err(VectorError::Overflow { index: 1 }));
        assert_eq!(vector[0], 1);
    }
}

// ANCHOR: kani
#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(3)]
    fn check_increment_all() {
        let mut vector: [i32; LENGTH] = kani::any();
        init(&mut vector);
        assert!(increment_all(&mut vector).is_ok());
        assert!(vector.iter().all(|&v| v == 1));
    }

    #[kani::proof]
    #[kani::unwind(3)]
    fn check_overflow_is_reported() {
        let original: [i32; LENGTH] = kani::any();
        let mut vector = original;
        let result = increment_all(&mut vector);
        assert_eq!(result.is_err(), original.contains(&i32::MAX));
    }
}
// ANCHOR_END: kani
