// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A length-tagged string buffer, and a consumer that is only safe on buffers
//! of at least five bytes. The harness states that requirement as an
//! assumption and checks the consumer leaves the buffer valid.

use crate::error::StrBufError;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrBuf {
    length: usize,
    buffer: Vec<u8>,
}

impl StrBuf {
    /// A zero-filled buffer of `length` bytes.
    pub fn allocate(length: usize) -> Result<StrBuf, StrBufError> {
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(length).map_err(|_| StrBufError::AllocFailed { length })?;
        buffer.resize(length, 0);
        debug!(length, "allocated string buffer");
        Ok(StrBuf { length, buffer })
    }

    pub fn from_bytes(bytes: &[u8]) -> StrBuf {
        StrBuf { length: bytes.len(), buffer: bytes.to_vec() }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// The declared length agrees with the storage behind it.
    pub fn is_valid(&self) -> bool {
        self.buffer.len() == self.length
    }
}

/// Remembers the fifth character of the last buffer it saw.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FifthCharCache {
    cache: Option<u8>,
}

impl FifthCharCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<u8> {
        self.cache
    }

    pub fn cache_fifth_char(&mut self, strbuf: &StrBuf) -> Result<u8, StrBufError> {
        let fifth = *strbuf.buffer.get(4).ok_or(StrBufError::TooShort { length: strbuf.length })?;
        self.cache = Some(fifth);
        Ok(fifth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_is_valid() {
        for length in 0..16 {
            let str = StrBuf::allocate(length).unwrap();
            assert!(str.is_valid());
            assert_eq!(str.len(), length);
            assert!(str.as_bytes().iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn huge_allocation_fails() {
        let err = StrBufError::AllocFailed { length: usize::MAX };
        assert_eq!(StrBuf::allocate(usize::MAX), Err(err));
    }

    #[test]
    fn caches_fifth() {
        let mut cache = FifthCharCache::new();
        assert_eq!(cache.cache_fifth_char(&StrBuf::from_bytes(b"hello")), Ok(b'o'));
        assert_eq!(cache.get(), Some(b'o'));
    }

    #[test]
    fn short_buffer_keeps_old_cache() {
        let mut cache = FifthCharCache::new();
        cache.cache_fifth_char(&StrBuf::from_bytes(b"kani!")).unwrap();
        assert_eq!(
            cache.cache_fifth_char(&StrBuf::from_bytes(b"abcd")),
            Err(StrBufError::TooShort { length: 4 })
        );
        assert_eq!(cache.get(), Some(b'!'));
    }
}

// ANCHOR: kani
#[cfg(kani)]
mod verification {
    use super::*;

    const MAX_LENGTH: usize = 8;

    #[kani::proof]
    #[kani::unwind(9)]
    fn check_cache_fifth_char() {
        let length: usize = kani::any();
        kani::assume(length <= MAX_LENGTH);
        let str = StrBuf::allocate(length);
        kani::assume(str.is_ok());
        let str = str.unwrap();

        kani::assume(str.is_valid());
        kani::assume(str.len() > 4);

        let mut cache = FifthCharCache::new();
        assert!(cache.cache_fifth_char(&str).is_ok());

        assert!(str.is_valid(), "String buffer remains valid");
        assert!(str.len() > 4, "String buffer remains length >4");
    }

    #[kani::proof]
    #[kani::unwind(9)]
    fn check_short_buffer_is_rejected() {
        let length: usize = kani::any();
        kani::assume(length <= 4);
        let str = StrBuf::allocate(length).unwrap();
        let mut cache = FifthCharCache::new();
        assert!(cache.cache_fifth_char(&str).is_err());
        assert!(cache.get().is_none());
    }
}
// ANCHOR_END: kani
