//! # flowloc - Flow-Code Location Resolution Engine
//!
//! **flowloc** resolves, for a logistics flow code, which physical storage
//! location(s) currently apply. Each flow record carries time-window rules
//! in a small custom grammar, and may redirect to another record through an
//! "attached flow" alias keyed by a secondary mapping code. The engine
//! parses the rules into a typed AST, follows the alias chain to a terminal
//! record with cycle safety, and evaluates that record's rules against a
//! point in time.
//!
//! ## Core Workflow
//!
//! 1.  **Provide storage**: Implement the [`repository::FlowRepository`]
//!     trait over your store, or use the in-tree
//!     [`repository::MemoryRepository`] backed by a JSON row file.
//! 2.  **Build a locator**: Use [`locator::Locator::builder`] to pick the
//!     access mode (full snapshot vs. one record per request) and,
//!     optionally, a diagnostics observer.
//! 3.  **Resolve**: Call `find_current_locations(code, timestamp)`. Every
//!     location whose rule holds at that instant is returned in slot
//!     order; a record with no currently-active rule yields one fallback
//!     entry instead.
//!
//! Alias anomalies (cycles, dangling mapping codes) never fail a request:
//! resolution falls back to the last-known-good code and reports the
//! condition as a [`diagnostics::ResolutionEvent`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowloc::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // A tiny rule set: 574W redirects (via mapping code M9) to BASE1,
//!     // which stores at DockA around the clock.
//!     let rows = r#"[
//!         {"code": "574W", "mapping": "W4", "flow_name": "West outbound",
//!          "attached_flow": "M9"},
//!         {"code": "BASE1", "mapping": "M9", "flow_name": "Base line 1",
//!          "physical_location_1": "DockA", "time_rule_1": "all"}
//!     ]"#;
//!     let repository = MemoryRepository::from_json(rows)?;
//!
//!     let mut locator = Locator::builder(repository)
//!         .mode(AccessMode::Snapshot)
//!         .observer(EventLog::new())
//!         .build();
//!
//!     let at = NaiveDateTime::parse_from_str("2026-08-05 09:30", "%Y-%m-%d %H:%M")?;
//!     match locator.find_current_locations("574W", at)? {
//!         Some(matches) => {
//!             for m in &matches {
//!                 println!(
//!                     "{} -> {} (aliased: {})",
//!                     m.requested_code, m.location, m.aliased
//!                 );
//!             }
//!         }
//!         None => println!("no record for that code"),
//!     }
//!
//!     for event in &locator.observer().events {
//!         println!("note: {}", event);
//!     }
//!     Ok(())
//! }
//! ```

pub mod diagnostics;
pub mod error;
pub mod locator;
pub mod prelude;
pub mod record;
pub mod repository;
pub mod resolver;
pub mod rule;
