use crate::error::RuleParseError;
use itertools::Itertools;
use std::fmt;

/// A structured event emitted while resolving a flow code.
///
/// Alias-chain anomalies are soft: resolution always produces a usable
/// answer, and the anomaly arrives here as data the caller can assert on
/// or forward to its own logging, instead of a console warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionEvent {
    SnapshotLoaded {
        records: usize,
    },
    AliasFollowed {
        from: String,
        to: String,
        mapping: String,
    },
    CycleDetected {
        /// Codes visited before re-entry, in order.
        path: Vec<String>,
        /// The code seen twice; resolution terminates here.
        reentry: String,
    },
    DanglingAlias {
        code: String,
        mapping: String,
    },
    MalformedRule {
        code: String,
        location: String,
        rule: String,
        error: RuleParseError,
    },
}

impl fmt::Display for ResolutionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionEvent::SnapshotLoaded { records } => {
                write!(f, "snapshot loaded with {} records", records)
            }
            ResolutionEvent::AliasFollowed { from, to, mapping } => {
                write!(f, "flow {} attaches to {} (mapping code: {})", from, to, mapping)
            }
            ResolutionEvent::CycleDetected { path, reentry } => {
                write!(
                    f,
                    "cyclic attachment detected: {}",
                    path.iter().chain(std::iter::once(reentry)).join(" -> ")
                )
            }
            ResolutionEvent::DanglingAlias { code, mapping } => {
                write!(
                    f,
                    "flow {} attaches to mapping code {}, which no record owns",
                    code, mapping
                )
            }
            ResolutionEvent::MalformedRule {
                code,
                location,
                rule,
                error,
            } => {
                write!(
                    f,
                    "flow {}: time rule '{}' for location '{}' is malformed: {}",
                    code, rule, location, error
                )
            }
        }
    }
}

/// Receives resolution events as they happen.
pub trait ResolutionObserver {
    fn observe(&mut self, event: &ResolutionEvent);
}

/// Discards every event. The default observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ResolutionObserver for NullObserver {
    fn observe(&mut self, _event: &ResolutionEvent) {}
}

/// Collects events in order. Used by tests and the CLI's verbose mode.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<ResolutionEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl ResolutionObserver for EventLog {
    fn observe(&mut self, event: &ResolutionEvent) {
        self.events.push(event.clone());
    }
}
