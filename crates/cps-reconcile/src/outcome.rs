//! Terminal row outcomes: the closed tag set the summary is built from.

use std::fmt;

/// Exactly one per processed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Created,
    Skipped(SkipReason),
    Errored(RowError),
}

/// Benign reasons a row is skipped rather than created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The existence check found the property under its normalized name.
    AlreadyExists,
    /// Creation was rejected for a non-unique label: the property exists
    /// under a different internal name.
    DuplicateLabel,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::AlreadyExists => write!(f, "already exists"),
            SkipReason::DuplicateLabel => write!(f, "already exists (non-unique label)"),
        }
    }
}

/// Row-level failures. Each isolates to one row; the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// The object-type column was empty.
    UnknownObjectType(String),
    /// Group-ensure failed for this row's object type (possibly cached from
    /// an earlier row in the same run).
    GroupUnavailable(String),
    /// The type descriptor is outside the fixed mapping table.
    UnknownPropertyType(String),
    /// The existence check came back neither found nor not-found.
    AmbiguousExistence {
        status: Option<u16>,
        detail: String,
    },
    /// Creation failed for a reason other than a duplicate label.
    CreateFailed {
        status: Option<u16>,
        detail: String,
    },
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::UnknownObjectType(raw) => {
                write!(f, "unknown object type '{raw}'")
            }
            RowError::GroupUnavailable(slug) => {
                write!(f, "property group unavailable for object type '{slug}'")
            }
            RowError::UnknownPropertyType(raw) => {
                write!(f, "unknown property type '{raw}'")
            }
            RowError::AmbiguousExistence { status, detail } => match status {
                Some(s) => write!(f, "ambiguous existence check (status {s}): {detail}"),
                None => write!(f, "existence check transport failure: {detail}"),
            },
            RowError::CreateFailed { status, detail } => match status {
                Some(s) => write!(f, "creation failed (status {s}): {detail}"),
                None => write!(f, "creation transport failure: {detail}"),
            },
        }
    }
}
