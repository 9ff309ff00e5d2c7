use crate::requests::Operation;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one invocation of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    pub operation: Operation,
    seq: u64,
}

/// Per-operation sequence counters. Only the most recently issued token of
/// an operation may render; older in-flight responses are discarded.
#[derive(Debug, Default)]
pub struct RequestTokens {
    latest: [AtomicU64; Operation::ALL.len()],
}

impl RequestTokens {
    pub fn issue(&self, operation: Operation) -> RequestToken {
        let seq = self.latest[operation.index()].fetch_add(1, Ordering::SeqCst) + 1;
        RequestToken { operation, seq }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest[token.operation.index()].load(Ordering::SeqCst) == token.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_token_supersedes_older() {
        let tokens = RequestTokens::default();
        let first = tokens.issue(Operation::Data);
        assert!(tokens.is_current(first));
        let second = tokens.issue(Operation::Data);
        assert!(!tokens.is_current(first));
        assert!(tokens.is_current(second));
    }

    #[test]
    fn operations_are_tracked_independently() {
        let tokens = RequestTokens::default();
        let data = tokens.issue(Operation::Data);
        let _filter = tokens.issue(Operation::Filter);
        let _analysis = tokens.issue(Operation::Analysis);
        assert!(tokens.is_current(data));
    }
}
