use chrono::{Local, NaiveDateTime};

use crate::diagnostics::{NullObserver, ResolutionEvent, ResolutionObserver};
use crate::error::RepositoryError;
use crate::record::{FlowRecord, SearchHit};
use crate::repository::{AccessMode, FlowRepository, Snapshot};
use crate::resolver::resolve_attachment;
use crate::rule::parse_rule;

/// Location text used when a record exists but none of its rules matches
/// the query timestamp. A fixed constant so callers can compare against it.
pub const NO_ACTIVE_LOCATION: &str = "unknown (no rule currently applicable for this time)";

/// One currently-active physical location for a resolved flow code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationMatch {
    /// Mapping code of the terminal record.
    pub mapping: String,
    /// Flow name of the terminal record.
    pub flow_name: String,
    /// Flow name of the record as requested, before any aliasing.
    pub original_flow_name: String,
    /// The active physical location, or `NO_ACTIVE_LOCATION`.
    pub location: String,
    /// True iff aliasing changed the code, regardless of whether the
    /// fallback fired.
    pub aliased: bool,
    pub requested_code: String,
    pub resolved_code: String,
}

/// Resolves flow codes to their currently-active physical locations.
///
/// Owns the repository handle, the access-mode configuration and the
/// snapshot lifecycle; alias resolution and rule evaluation hang off it.
/// Built via `Locator::builder`.
pub struct Locator<R, O = NullObserver> {
    repository: R,
    mode: AccessMode,
    snapshot: Snapshot,
    observer: O,
}

pub struct LocatorBuilder<R, O> {
    repository: R,
    mode: AccessMode,
    observer: O,
}

impl<R: FlowRepository> Locator<R, NullObserver> {
    pub fn builder(repository: R) -> LocatorBuilder<R, NullObserver> {
        LocatorBuilder {
            repository,
            mode: AccessMode::default(),
            observer: NullObserver,
        }
    }

    /// A locator with the default configuration: snapshot mode, no
    /// observer.
    pub fn new(repository: R) -> Self {
        Self::builder(repository).build()
    }
}

impl<R: FlowRepository, O: ResolutionObserver> LocatorBuilder<R, O> {
    pub fn mode(mut self, mode: AccessMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn observer<O2: ResolutionObserver>(self, observer: O2) -> LocatorBuilder<R, O2> {
        LocatorBuilder {
            repository: self.repository,
            mode: self.mode,
            observer,
        }
    }

    pub fn build(self) -> Locator<R, O> {
        Locator {
            repository: self.repository,
            mode: self.mode,
            snapshot: Snapshot::Unloaded,
            observer: self.observer,
        }
    }
}

impl<R: FlowRepository, O: ResolutionObserver> Locator<R, O> {
    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Populates the in-memory snapshot unless one is already held.
    pub fn load_snapshot(&mut self) -> Result<(), RepositoryError> {
        if !self.snapshot.is_loaded() {
            self.reload_snapshot()?;
        }
        Ok(())
    }

    /// Re-reads the full rule set. The new table is built completely
    /// before it replaces the previous one, so a reader never observes a
    /// half-updated snapshot. Writes made elsewhere are only picked up
    /// through this call; nothing invalidates the snapshot automatically.
    pub fn reload_snapshot(&mut self) -> Result<(), RepositoryError> {
        let table = self.repository.load_all()?;
        self.observer.observe(&ResolutionEvent::SnapshotLoaded {
            records: table.len(),
        });
        self.snapshot = Snapshot::Loaded {
            table,
            loaded_at: Local::now().naive_local(),
        };
        Ok(())
    }

    /// Fetches one record per the configured access mode. In per-record
    /// mode a snapshot forced by an earlier aliasing step answers
    /// directly instead of going back to storage.
    fn fetch(&mut self, code: &str) -> Result<Option<FlowRecord>, RepositoryError> {
        match self.mode {
            AccessMode::Snapshot => {
                self.load_snapshot()?;
                Ok(self
                    .snapshot
                    .table()
                    .and_then(|table| table.get(code))
                    .cloned())
            }
            AccessMode::PerRecord => match self.snapshot.table() {
                Some(table) => Ok(table.get(code).cloned()),
                None => self.repository.load_one(code),
            },
        }
    }

    /// Resolves the currently-active physical location(s) for `code` at
    /// the given point in time.
    ///
    /// `Ok(None)` means the code has no record at all, which is distinct
    /// from "found, but no rule currently matches": the latter yields
    /// exactly one entry whose location is `NO_ACTIVE_LOCATION`. When a
    /// record is attached, the terminal record's rules are evaluated and
    /// every rule that holds contributes one match in slot order.
    pub fn find_current_locations(
        &mut self,
        code: &str,
        at: NaiveDateTime,
    ) -> Result<Option<Vec<LocationMatch>>, RepositoryError> {
        let Some(requested) = self.fetch(code)? else {
            return Ok(None);
        };
        let original_flow_name = requested.name.clone();

        let mut terminal = requested;
        let mut resolved_code = code.to_string();

        if terminal.is_attached() {
            // Mapping lookup is a cross-record scan; force the snapshot
            // even in per-record mode.
            self.load_snapshot()?;
            let Snapshot::Loaded { table, .. } = &self.snapshot else {
                return Err(RepositoryError::Backend(
                    "snapshot unavailable after load".to_string(),
                ));
            };
            let resolution = resolve_attachment(code, table, &mut self.observer);
            // The terminal record's rules are authoritative; keep the
            // requested record if the terminal fetch comes up empty.
            terminal = table
                .get(&resolution.terminal_code)
                .cloned()
                .unwrap_or(terminal);
            resolved_code = resolution.terminal_code;
        }

        let aliased = resolved_code != code;
        let mut matches = Vec::new();
        for location_rule in &terminal.location_rules {
            let active = match parse_rule(&location_rule.rule) {
                Ok(time_rule) => time_rule.matches_at(at),
                Err(error) => {
                    // Malformed rules never match; the request stays
                    // serviceable.
                    self.observer.observe(&ResolutionEvent::MalformedRule {
                        code: terminal.code.clone(),
                        location: location_rule.location.clone(),
                        rule: location_rule.rule.clone(),
                        error,
                    });
                    false
                }
            };
            if active {
                matches.push(LocationMatch {
                    mapping: terminal.mapping.clone(),
                    flow_name: terminal.name.clone(),
                    original_flow_name: original_flow_name.clone(),
                    location: location_rule.location.clone(),
                    aliased,
                    requested_code: code.to_string(),
                    resolved_code: resolved_code.clone(),
                });
            }
        }

        if matches.is_empty() {
            matches.push(LocationMatch {
                mapping: terminal.mapping.clone(),
                flow_name: terminal.name.clone(),
                original_flow_name,
                location: NO_ACTIVE_LOCATION.to_string(),
                aliased,
                requested_code: code.to_string(),
                resolved_code,
            });
        }

        Ok(Some(matches))
    }

    /// Fuzzy search over the rule set; loads the snapshot on first use.
    pub fn search(&mut self, query: &str) -> Result<Vec<SearchHit>, RepositoryError> {
        self.load_snapshot()?;
        Ok(self
            .snapshot
            .table()
            .map(|table| table.search(query))
            .unwrap_or_default())
    }
}
