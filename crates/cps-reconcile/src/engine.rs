//! The per-row state machine and the run loop driving it.
//!
//! Row pipeline:
//!
//! ```text
//! Start -> ObjectTypeResolved -> GroupEnsured -> TypeResolved
//!       -> NameGenerated -> ExistenceChecked -> Created | Skipped | Errored
//! ```
//!
//! Rows are processed one at a time; each remote call is awaited to
//! completion before the next step. The only mutable state shared across
//! rows is the group-ensure cache inside [`RunContext`].

use std::collections::HashMap;

use cps_client::{CreateOutcome, Existence, SchemaService};
use cps_schema::{
    build_payload, map_property_type, object_type_slug, PropertyRequest, PROPERTY_GROUP_LABEL,
    PROPERTY_GROUP_NAME,
};

use crate::outcome::{RowError, RowOutcome, SkipReason};
use crate::report::RunSummary;

// ---------------------------------------------------------------------------
// Run context
// ---------------------------------------------------------------------------

/// Everything one reconciliation run needs: the service handle, the group
/// identity, and the per-run group-ensure cache. No process-wide state.
pub struct RunContext<'a> {
    service: &'a dyn SchemaService,
    group_name: String,
    group_label: String,
    /// slug -> ensured. A cached `false` stays `false` for the whole run.
    group_checked: HashMap<String, bool>,
}

impl<'a> RunContext<'a> {
    /// Context targeting the default import group.
    pub fn new(service: &'a dyn SchemaService) -> Self {
        Self::with_group(service, PROPERTY_GROUP_NAME, PROPERTY_GROUP_LABEL)
    }

    pub fn with_group(service: &'a dyn SchemaService, group_name: &str, group_label: &str) -> Self {
        Self {
            service,
            group_name: group_name.to_string(),
            group_label: group_label.to_string(),
            group_checked: HashMap::new(),
        }
    }

    /// Memoized group-ensure: at most one `ensure_group` per distinct slug
    /// per run, success or failure.
    async fn group_ensured(&mut self, slug: &str) -> bool {
        if let Some(ensured) = self.group_checked.get(slug) {
            return *ensured;
        }
        let ensured = self
            .service
            .ensure_group(slug, &self.group_name, &self.group_label)
            .await;
        if !ensured {
            tracing::error!(
                object_type = slug,
                "cannot ensure property group; all rows for this object type will error"
            );
        }
        self.group_checked.insert(slug.to_string(), ensured);
        ensured
    }
}

// ---------------------------------------------------------------------------
// Run loop
// ---------------------------------------------------------------------------

/// Reconcile all rows and return the finalized summary.
pub async fn run(ctx: &mut RunContext<'_>, rows: &[PropertyRequest]) -> RunSummary {
    let mut summary = RunSummary::new();

    for row in rows {
        let outcome = process_row(ctx, row).await;
        match &outcome {
            RowOutcome::Created => {
                tracing::info!(property = %row.name, "created property");
            }
            RowOutcome::Skipped(reason) => {
                tracing::info!(property = %row.name, %reason, "skipped property");
            }
            RowOutcome::Errored(err) => {
                tracing::error!(property = %row.name, error = %err, "row failed");
            }
        }
        summary.record(&row.name, &outcome);
    }

    summary.emit();
    summary
}

/// Drive one row to its terminal state.
pub async fn process_row(ctx: &mut RunContext<'_>, row: &PropertyRequest) -> RowOutcome {
    // 1. Object type
    let Some(slug) = object_type_slug(&row.object_type) else {
        return RowOutcome::Errored(RowError::UnknownObjectType(row.object_type.clone()));
    };

    // 2. Group (memoized per run)
    if !ctx.group_ensured(&slug).await {
        return RowOutcome::Errored(RowError::GroupUnavailable(slug));
    }

    // 3. Type mapping
    let Some(mapping) = map_property_type(&row.property_type) else {
        return RowOutcome::Errored(RowError::UnknownPropertyType(row.property_type.clone()));
    };

    // 4. Name + payload
    let payload = build_payload(row, &mapping, &ctx.group_name);
    tracing::info!(
        property = %row.name,
        api_name = %payload.name,
        object_type = %slug,
        "built creation payload"
    );

    // 5. Existence
    match ctx.service.property_exists(&slug, &payload.name).await {
        Existence::Exists => {
            return RowOutcome::Skipped(SkipReason::AlreadyExists);
        }
        Existence::Unknown { status, detail } => {
            return RowOutcome::Errored(RowError::AmbiguousExistence { status, detail });
        }
        Existence::Absent => {}
    }

    // 6. Create
    match ctx.service.create_property(&slug, &payload).await {
        CreateOutcome::Created => RowOutcome::Created,
        CreateOutcome::DuplicateLabel => RowOutcome::Skipped(SkipReason::DuplicateLabel),
        CreateOutcome::Failed { status, detail } => {
            RowOutcome::Errored(RowError::CreateFailed { status, detail })
        }
    }
}
