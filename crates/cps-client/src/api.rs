//! Schema-service contract: trait, outcome tags, and error type.
//!
//! Design rule: the reconcile engine must branch on closed tag sets, never on
//! response-body strings. Existence checks return a tri-state, creation
//! returns a tagged outcome, and group-ensure collapses every failure path
//! into `false` (logged, not raised) so one broken object type cannot abort
//! a whole run.

use std::fmt;

use cps_schema::PropertyPayload;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors from the primitive group operations ([`SchemaService::list_groups`]
/// and [`SchemaService::create_group`]). Higher-level operations fold their
/// failures into sentinel values instead.
#[derive(Debug)]
pub enum ClientError {
    /// Network or transport failure.
    Transport(String),
    /// The service answered with a non-success status.
    Api { status: u16, body: String },
    /// A response payload could not be decoded.
    Decode(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "transport error: {msg}"),
            ClientError::Api { status, body } => {
                write!(f, "schema api error status={status}: {body}")
            }
            ClientError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

// ---------------------------------------------------------------------------
// Wire types and outcome tags
// ---------------------------------------------------------------------------

/// One property group as listed by the service. Only the internal name is
/// needed for the existence check; everything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct GroupDescriptor {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Tri-state result of a property existence check.
///
/// `Unknown` covers both transport failures and ambiguous statuses (anything
/// other than 200/404). Callers must treat it as a hard per-row error and
/// never assume either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Existence {
    Exists,
    Absent,
    Unknown {
        status: Option<u16>,
        detail: String,
    },
}

/// Tagged outcome of a property-creation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// The service rejected the label as non-unique: the property already
    /// exists under a different internal name. Benign; callers skip the row.
    DuplicateLabel,
    Failed {
        status: Option<u16>,
        detail: String,
    },
}

// ---------------------------------------------------------------------------
// Service trait
// ---------------------------------------------------------------------------

/// Remote schema-service operations, object-type-scoped.
///
/// Object-safe so the engine can hold a `&dyn SchemaService`; `Send + Sync`
/// so implementations can be shared across async call sites.
#[async_trait::async_trait]
pub trait SchemaService: Send + Sync {
    /// List property groups for an object type.
    async fn list_groups(&self, object_type: &str) -> Result<Vec<GroupDescriptor>, ClientError>;

    /// Create a property group for an object type.
    async fn create_group(
        &self,
        object_type: &str,
        name: &str,
        label: &str,
    ) -> Result<(), ClientError>;

    /// Check whether a property exists on an object type.
    async fn property_exists(&self, object_type: &str, name: &str) -> Existence;

    /// Create a property on an object type.
    async fn create_property(&self, object_type: &str, payload: &PropertyPayload)
        -> CreateOutcome;

    /// Ensure the named group exists for an object type.
    ///
    /// Lists groups; a name match returns `true` without creating anything.
    /// Otherwise attempts creation and returns `true` only on success. Every
    /// failure path is logged and returns `false`; the run continues in
    /// degraded mode for this object type rather than aborting.
    async fn ensure_group(&self, object_type: &str, name: &str, label: &str) -> bool {
        let groups = match self.list_groups(object_type).await {
            Ok(groups) => groups,
            Err(e) => {
                tracing::error!(object_type, error = %e, "failed to list property groups");
                return false;
            }
        };

        if groups.iter().any(|g| g.name == name) {
            return true;
        }

        match self.create_group(object_type, name, label).await {
            Ok(()) => {
                tracing::info!(object_type, group = name, "created property group");
                true
            }
            Err(e) => {
                tracing::error!(object_type, group = name, error = %e, "failed to create property group");
                false
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
