//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! flowloc crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowloc::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let repository = MemoryRepository::from_json_file("path/to/flows.json")?;
//! let mut locator = Locator::new(repository);
//!
//! let at = NaiveDateTime::parse_from_str("2026-08-05 09:30", "%Y-%m-%d %H:%M")?;
//! if let Some(matches) = locator.find_current_locations("574W", at)? {
//!     for m in &matches {
//!         println!("{}: {}", m.resolved_code, m.location);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// Orchestration
pub use crate::locator::{LocationMatch, Locator, LocatorBuilder, NO_ACTIVE_LOCATION};

// Records and the rule set table
pub use crate::record::{
    FlowRecord, FlowTable, IntoFlowTable, LocationRule, MatchField, RawFlowRow, SearchHit,
};

// Storage contract
pub use crate::repository::{AccessMode, FlowRepository, MemoryRepository, Snapshot};

// Rule grammar
pub use crate::rule::{parse_rule, Branch, ClockTime, Conjunct, TimeRule, WeekdaySpan};

// Alias resolution
pub use crate::resolver::{resolve_attachment, Resolution};

// Diagnostics
pub use crate::diagnostics::{EventLog, NullObserver, ResolutionEvent, ResolutionObserver};

// Error types
pub use crate::error::{RepositoryError, RuleParseError, TableConversionError};

// Commonly used alongside this crate
pub use chrono::NaiveDateTime;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
