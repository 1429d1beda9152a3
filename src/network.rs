// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A function that depends on data from the network.
//!
//! The network is reached through the [`Network`] trait so that a harness can
//! swap in a model of it. [`MockNetwork`] replays queued messages for tests;
//! under Kani, the model receives any positive integer.

use crate::error::NetworkError;
use std::collections::VecDeque;
use tracing::trace;

pub trait Network {
    fn receive(&mut self) -> Result<i32, NetworkError>;
    fn send(&mut self, msg: i32) -> Result<(), NetworkError>;
}

/// In-memory network: `receive` pops from the inbox, `send` appends to the outbox.
#[derive(Debug, Default, Clone)]
pub struct MockNetwork {
    inbox: VecDeque<i32>,
    outbox: Vec<i32>,
}

impl MockNetwork {
    pub fn new(inbox: impl IntoIterator<Item = i32>) -> Self {
        MockNetwork { inbox: inbox.into_iter().collect(), outbox: Vec::new() }
    }

    pub fn sent(&self) -> &[i32] {
        &self.outbox
    }
}

impl Network for MockNetwork {
    fn receive(&mut self) -> Result<i32, NetworkError> {
        let msg = self.inbox.pop_front().ok_or(NetworkError::Disconnected)?;
        trace!(msg, "received");
        Ok(msg)
    }

    fn send(&mut self, msg: i32) -> Result<(), NetworkError> {
        trace!(msg, "sent");
        self.outbox.push(msg);
        Ok(())
    }
}

// ANCHOR: code
/// Receive a message and return its successor. Messages must be positive.
pub fn alpha<N: Network>(net: &mut N) -> Result<i32, NetworkError> {
    let y = net.receive()?;
    if y <= 0 {
        return Err(NetworkError::NonPositive(y));
    }
    y.checked_add(1).ok_or(NetworkError::Overflow(y))
}
// ANCHOR_END: code

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_message() {
        let mut net = MockNetwork::new([41]);
        assert_eq!(alpha(&mut net), Ok(42));
        assert_eq!(alpha(&mut net), Err(NetworkError::Disconnected));
    }

    #[test]
    fn rejects_non_positive() {
        let mut net = MockNetwork::new([0, -5]);
        assert_eq!(alpha(&mut net), Err(NetworkError::NonPositive(0)));
        assert_eq!(alpha(&mut net), Err(NetworkError::NonPositive(-5)));
    }

    #[test]
    fn largest_message_overflows() {
        let mut net = MockNetwork::new([i32::MAX]);
        assert_eq!(alpha(&mut net), Err(NetworkError::Overflow(i32::MAX)));
    }

    #[test]
    fn send_records() {
        let mut net = MockNetwork::default();
        net.send(3).unwrap();
        net.send(4).unwrap();
        assert_eq!(net.sent(), &[3, 4]);
    }
}

// ANCHOR: kani
#[cfg(kani)]
mod verification {
    use super::*;

    /// Receives an unconstrained positive integer; sending does nothing.
    struct AnyPositive;

    impl Network for AnyPositive {
        fn receive(&mut self) -> Result<i32, NetworkError> {
            Ok(kani::any_where(|msg: &i32| *msg > 0))
        }

        fn send(&mut self, _msg: i32) -> Result<(), NetworkError> {
            Ok(())
        }
    }

    #[kani::proof]
    fn check_alpha() {
        match alpha(&mut AnyPositive) {
            Ok(y) => assert!(y > 1),
            Err(err) => assert_eq!(err, NetworkError::Overflow(i32::MAX)),
        }
    }
}
// ANCHOR_END: kani
