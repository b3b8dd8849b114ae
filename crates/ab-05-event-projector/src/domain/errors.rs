//! # Domain Errors
//!
//! Replay errors. An out-of-order event is fatal for the replay pass:
//! skipping it would corrupt last-write-wins entity state, so the
//! projector halts and reports instead.

use super::events::EventPosition;
use thiserror::Error;

/// Event projection error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// An event arrived behind the last applied position.
    #[error("Out-of-order event: got {got}, already applied through {last}")]
    OutOfOrder {
        /// Last successfully applied position.
        last: EventPosition,
        /// Position of the offending event.
        got: EventPosition,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_order_names_both_positions() {
        let err = ProjectionError::OutOfOrder {
            last: EventPosition::new(10, 2),
            got: EventPosition::new(9, 0),
        };
        let msg = err.to_string();
        assert!(msg.contains("10:2"));
        assert!(msg.contains("9:0"));
    }
}
