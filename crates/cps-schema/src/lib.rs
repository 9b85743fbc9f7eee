//! cps-schema
//!
//! Domain model for CRM property synchronization.
//!
//! This crate owns the pure, IO-free half of the sync pipeline:
//! - name normalization (human label -> machine-safe API name)
//! - the static CSV-type -> HubSpot field-model mapping
//! - the object-type slug mapping
//! - the wire payload shape and its builder
//! - CSV ingestion (read side only; no network, no reconciliation)
//!
//! It does **not** talk to the remote schema service (that is `cps-client`)
//! and does **not** drive the per-row state machine (that is `cps-reconcile`).

pub mod ingest_csv;
pub mod mapping;
pub mod normalizer;
pub mod payload;

pub use ingest_csv::{read_property_csv, read_property_rows, CsvIngestError};
pub use mapping::{map_property_type, object_type_slug, supports_options, ApiType, TypeMapping};
pub use normalizer::{option_value, property_api_name};
pub use payload::{build_payload, parse_options, PropertyOption, PropertyPayload, PropertyRequest};

/// Internal name of the property group every synced property is filed under.
///
/// Fixed by design: this tool only ever reconciles into its own group.
pub const PROPERTY_GROUP_NAME: &str = "api_imported_properties";

/// Human-readable label shown in the CRM UI for [`PROPERTY_GROUP_NAME`].
pub const PROPERTY_GROUP_LABEL: &str = "API Imported Properties";

/// Display order sent when the group has to be created.
pub const PROPERTY_GROUP_DISPLAY_ORDER: i32 = 1;
