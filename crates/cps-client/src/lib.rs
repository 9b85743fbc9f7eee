//! cps-client
//!
//! Schema-service boundary for CRM property synchronization.
//!
//! This crate owns the [`SchemaService`] trait (the seam the reconcile engine
//! is written against) and the concrete HubSpot-backed implementation. Every
//! remote failure is converted into a sentinel value or a tagged outcome at
//! this boundary; transport-level errors never cross into the engine.

pub mod api;
pub mod hubspot;

pub use api::{ClientError, CreateOutcome, Existence, GroupDescriptor, SchemaService};
pub use hubspot::{HubSpotSchemaClient, DEFAULT_BASE_URL};
