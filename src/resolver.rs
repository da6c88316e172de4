use crate::diagnostics::{ResolutionEvent, ResolutionObserver};
use crate::record::FlowTable;

/// The outcome of following a chain of attached flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The terminal code. Equal to the requested code when the record has
    /// no attachment, does not exist, or the chain had to be cut short.
    pub terminal_code: String,
    /// Codes visited in order, starting with the requested code. On a
    /// cycle the re-entrant code appears once, at its first visit.
    pub path: Vec<String>,
}

impl Resolution {
    /// Number of attachment edges actually followed to a new code.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn was_redirected(&self) -> bool {
        self.path.first().map(String::as_str) != Some(self.terminal_code.as_str())
    }
}

/// Follows the `attached_mapping` chain from `code` to a terminal code.
///
/// Each hop is one level of indirection: the mapping code is resolved to
/// its owning record's primary code before the walk continues. Iterative,
/// with a visited list local to this call; a revisited code is a cycle and
/// the walk stops there, returning the re-entry point. Total: every input
/// yields a code, anomalies are reported through the observer.
pub fn resolve_attachment(
    code: &str,
    table: &FlowTable,
    observer: &mut dyn ResolutionObserver,
) -> Resolution {
    let mut visited: Vec<String> = Vec::new();
    let mut current = code.to_string();

    loop {
        if visited.iter().any(|seen| *seen == current) {
            observer.observe(&ResolutionEvent::CycleDetected {
                path: visited.clone(),
                reentry: current.clone(),
            });
            return Resolution {
                terminal_code: current,
                path: visited,
            };
        }
        visited.push(current.clone());

        let Some(record) = table.get(&current) else {
            // Unknown code: nothing to resolve further.
            return Resolution {
                terminal_code: current,
                path: visited,
            };
        };

        let Some(mapping) = record.attachment() else {
            // Terminal node.
            return Resolution {
                terminal_code: current,
                path: visited,
            };
        };

        match table.find_code_by_mapping(mapping) {
            Some(next) => {
                observer.observe(&ResolutionEvent::AliasFollowed {
                    from: current.clone(),
                    to: next.to_string(),
                    mapping: mapping.to_string(),
                });
                current = next.to_string();
            }
            None => {
                observer.observe(&ResolutionEvent::DanglingAlias {
                    code: current.clone(),
                    mapping: mapping.to_string(),
                });
                return Resolution {
                    terminal_code: current,
                    path: visited,
                };
            }
        }
    }
}
