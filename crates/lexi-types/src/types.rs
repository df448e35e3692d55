use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// UI -> app: perform a lookup
    Lookup(LookupRequest),
    /// App -> UI: a lookup settled
    LookupFinished {
        id: RequestId,
        outcome: LookupOutcome,
    },
    BackendReady,
    Quit,
}

/// Monotonic tag of a submitted lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl RequestId {
    pub fn next(self) -> Self {
        RequestId(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub id: RequestId,
    /// Word exactly as typed, not normalized
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// First definition of each meaning, in order. May be empty.
    Found(Vec<String>),
    /// Any failure: HTTP status, network or decode
    NotFound,
}
