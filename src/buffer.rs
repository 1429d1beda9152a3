// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading a fixed-size buffer with an untrusted index.
//!
//! Both readers must reject negative indices as well as indices past the end;
//! guarding only `i < SIZE` still lets a negative index through.

pub const SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(kani, derive(kani::Arbitrary))]
pub struct Buffer {
    bytes: [u8; SIZE],
}

impl Buffer {
    pub fn new(bytes: [u8; SIZE]) -> Self {
        Buffer { bytes }
    }

    /// Checked position for `i`, or `None` when it lies outside the buffer.
    fn position(i: i32) -> Option<usize> {
        usize::try_from(i).ok().filter(|&i| i < SIZE)
    }

    // ANCHOR: code
    pub fn read_buffer(&self, i: i32) -> u8 {
        match Self::position(i) {
            Some(i) => self.bytes[i],
            None => b'\0',
        }
    }

    pub fn read_pointer(&self, i: i32) -> u8 {
        match Self::position(i) {
            // SAFETY: `position` only returns offsets below `SIZE`.
            Some(i) => unsafe { *self.bytes.as_ptr().add(i) },
            None => b'\0',
        }
    }
    // ANCHOR_END: code
}

impl Default for Buffer {
    fn default() -> Self {
        Buffer { bytes: [0; SIZE] }
    }
}


// ANCHOR: kani
#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn check_reads() {
        let buffer: Buffer = kani::any();
        let index: i32 = kani::any();
        let by_index = buffer.read_buffer(index);
        let by_pointer = buffer.read_pointer(index);
        assert_eq!(by_index, by_pointer);
        if index < 0 || index >= SIZE as i32 {
            assert_eq!(by_index, b'\0');
        }
    }
}
// ANCHOR_END: kani
