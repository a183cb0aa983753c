//! Ordering of superseding population lookups.
//!
//! Every target selection issues a fresh token. A lookup that completes
//! after a newer one was issued is stale and its answer is dropped, so a
//! slow early response can never overwrite a later selection.

use serde::Serialize;

/// Identifies one lookup. Later tokens compare greater.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing tokens and judges staleness.
#[derive(Clone, Debug, Default)]
pub struct LookupSequencer {
    latest: RequestToken,
}

impl LookupSequencer {
    /// Issue a token that supersedes every earlier one.
    pub fn issue(&mut self) -> RequestToken {
        self.latest = RequestToken(self.latest.0 + 1);
        self.latest
    }

    /// Make every outstanding token stale without starting a new lookup.
    pub fn invalidate(&mut self) {
        self.issue();
    }

    /// Whether `token` is still the most recent one issued.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token == self.latest
    }

    pub fn latest(&self) -> RequestToken {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_increase() {
        let mut sequencer = LookupSequencer::default();
        let first = sequencer.issue();
        let second = sequencer.issue();
        assert!(second > first);
        assert_eq!(sequencer.latest(), second);
    }

    #[test]
    fn test_only_latest_is_current() {
        let mut sequencer = LookupSequencer::default();
        let first = sequencer.issue();
        assert!(sequencer.is_current(first));

        let second = sequencer.issue();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn test_invalidate_stales_everything() {
        let mut sequencer = LookupSequencer::default();
        let token = sequencer.issue();
        sequencer.invalidate();
        assert!(!sequencer.is_current(token));
    }

    #[test]
    fn test_token_serializes_as_number() {
        let mut sequencer = LookupSequencer::default();
        let token = sequencer.issue();
        assert_eq!(serde_json::to_value(token).expect("serializable"), serde_json::json!(1));
    }

    #[test]
    fn test_default_token_is_never_current_after_issue() {
        let mut sequencer = LookupSequencer::default();
        sequencer.issue();
        assert!(!sequencer.is_current(RequestToken::default()));
    }
}
