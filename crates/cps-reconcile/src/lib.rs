//! cps-reconcile
//!
//! The per-row reconciliation engine.
//!
//! Architectural decisions:
//! - One pass, strictly sequential; exactly one terminal outcome per row
//! - Group-ensure is memoized per object type for the whole run
//! - A cached group failure short-circuits later rows of that object type;
//!   no retry within a run
//! - Row failures never abort the run
//! - The engine branches on the client's closed tag sets only; it never
//!   inspects response bodies
//!
//! No transport here. All IO goes through the `SchemaService` trait.

mod engine;
mod outcome;
mod report;

pub use engine::{process_row, run, RunContext};
pub use outcome::{RowError, RowOutcome, SkipReason};
pub use report::RunSummary;
