// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classify an integer into one of the four quartiles of `[0, 99]`.
//!
//! Every input gets exactly one label. Values outside `[0, 99]` are
//! [`Quartile::OutOfRange`]; the rest are split by two binary decisions, first
//! on the midpoint and then on the quarter boundaries.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Smallest value that falls inside a quartile band.
pub const LOWER: i32 = 0;
/// Largest value that falls inside a quartile band.
pub const UPPER: i32 = 99;

/// The label `quartile` assigns to an input. The discriminant is the numeric
/// code returned by [`classify`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[cfg_attr(kani, derive(kani::Arbitrary))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Quartile {
    OutOfRange = 0,
    Q1 = 1,
    Q2 = 2,
    Q3 = 3,
    Q4 = 4,
}

impl Quartile {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<Quartile> {
        match code {
            0 => Some(Quartile::OutOfRange),
            1 => Some(Quartile::Q1),
            2 => Some(Quartile::Q2),
            3 => Some(Quartile::Q3),
            4 => Some(Quartile::Q4),
            _ => None,
        }
    }

    /// The inputs that map to this label, or `None` for `OutOfRange`, which
    /// is not a contiguous range.
    pub fn band(self) -> Option<RangeInclusive<i32>> {
        match self {
            Quartile::OutOfRange => None,
            Quartile::Q1 => Some(0..=24),
            Quartile::Q2 => Some(25..=49),
            Quartile::Q3 => Some(50..=74),
            Quartile::Q4 => Some(75..=99),
        }
    }
}

// ANCHOR: code
pub fn quartile(x: i32) -> Quartile {
    if x < LOWER || x > UPPER {
        return Quartile::OutOfRange;
    }

    if x < 50 {
        if x < 25 {
            Quartile::Q1
        } else {
            Quartile::Q2
        }
    } else if x < 75 {
        Quartile::Q3
    } else {
        Quartile::Q4
    }
}
// ANCHOR_END: code

/// Numeric form of [`quartile`]: `0` for out of range, `1..=4` for the bands.
pub fn classify(x: i32) -> u8 {
    quartile(x).code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    #[test]
    fn boundaries() {
        let cases = [
            (-1, 0),
            (0, 1),
            (24, 1),
            (25, 2),
            (49, 2),
            (50, 3),
            (74, 3),
            (75, 4),
            (99, 4),
            (100, 0),
        ];
        for (x, code) in cases {
            assert_eq!(classify(x), code, "classify({x})");
        }
    }

    #[test]
    fn extremes_are_out_of_range() {
        assert_eq!(quartile(i32::MIN), Quartile::OutOfRange);
        assert_eq!(quartile(i32::MAX), Quartile::OutOfRange);
    }

    #[test]
    fn exhaustive_near_range() {
        for x in -1..=100 {
            let expected = match x {
                0..=24 => 1,
                25..=49 => 2,
                50..=74 => 3,
                75..=99 => 4,
                _ => 0,
            };
            assert_eq!(classify(x), expected, "classify({x})");
        }
    }

    #[test]
    fn bands_match_classification() {
        for label in Quartile::iter() {
            match label.band() {
                Some(mut band) => assert!(band.all(|x| quartile(x) == label)),
                None => assert_eq!(label, Quartile::OutOfRange),
            }
        }
    }

    #[test]
    fn codes() {
        for label in Quartile::iter() {
            assert_eq!(Quartile::from_code(label.code()), Some(label));
        }
        assert_eq!(Quartile::from_code(5), None);
        assert_eq!(Quartile::from_code(u8::MAX), None);
    }

    #[test]
    fn labels() {
        assert_eq!(Quartile::OutOfRange.to_string(), "OUT_OF_RANGE");
        assert_eq!(Quartile::Q3.as_ref(), "Q3");
        assert_eq!("Q2".parse::<Quartile>(), Ok(Quartile::Q2));
        assert!("Q5".parse::<Quartile>().is_err());
    }

    // ANCHOR: proptest
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10000))]
        #[test]
        fn outside_is_out_of_range(x in prop_oneof![i32::MIN..LOWER, (UPPER + 1)..=i32::MAX]) {
            prop_assert_eq!(classify(x), 0);
        }

        #[test]
        fn total_and_deterministic(x: i32) {
            let first = classify(x);
            prop_assert!(first <= 4);
            prop_assert_eq!(classify(x), first);
        }
    }
    // ANCHOR_END: proptest
}

// ANCHOR: kani
#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn check_first_quartile() {
        let x: i32 = kani::any();
        kani::assume(0 <= x && x < 25);
        assert_eq!(quartile(x), Quartile::Q1);
    }

    #[kani::proof]
    fn check_second_quartile() {
        let x: i32 = kani::any();
        kani::assume(25 <= x && x < 50);
        assert_eq!(quartile(x), Quartile::Q2);
    }

    #[kani::proof]
    fn check_third_quartile() {
        let x: i32 = kani::any();
        kani::assume(50 <= x && x < 75);
        assert_eq!(quartile(x), Quartile::Q3);
    }

    #[kani::proof]
    fn check_fourth_quartile() {
        let x: i32 = kani::any();
        kani::assume(75 <= x && x < 100);
        assert_eq!(quartile(x), Quartile::Q4);
    }

    #[kani::proof]
    fn check_out_of_range() {
        let x: i32 = kani::any();
        let code = classify(x);
        assert!(code <= 4);
        assert_eq!(code == 0, x < LOWER || x > UPPER);
        kani::cover!(code == 0);
    }

    #[kani::proof]
    fn check_code_roundtrip() {
        let label: Quartile = kani::any();
        assert_eq!(Quartile::from_code(label.code()), Some(label));
    }
}
// ANCHOR_END: kani
