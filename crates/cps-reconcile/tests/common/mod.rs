//! In-process mock `SchemaService` for engine scenario tests.
//!
//! Behavior is configured up front through the public sets; call recording
//! uses interior mutability because the trait takes `&self`.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use cps_client::{ClientError, CreateOutcome, Existence, GroupDescriptor, SchemaService};
use cps_schema::{PropertyPayload, PROPERTY_GROUP_NAME};

#[derive(Default)]
pub struct MockService {
    /// Object-type slugs whose import group already exists.
    pub groups: Mutex<HashSet<String>>,
    /// Slugs for which group listing fails outright.
    pub fail_group_listing: HashSet<String>,
    /// `slug/name` keys of properties that already exist remotely.
    pub existing: Mutex<HashSet<String>>,
    /// Normalized names whose existence check is ambiguous.
    pub ambiguous: HashSet<String>,
    /// Normalized names whose creation is rejected as a duplicate label.
    pub duplicate_labels: HashSet<String>,
    /// Normalized names whose creation fails for other reasons.
    pub failing_creates: HashSet<String>,

    /// `list_groups` invocations per slug.
    pub list_calls: Mutex<HashMap<String, usize>>,
    /// Successful creations, in call order.
    pub created: Mutex<Vec<(String, PropertyPayload)>>,
}

impl MockService {
    pub fn with_groups(slugs: &[&str]) -> Self {
        let svc = Self::default();
        let mut groups = svc.groups.lock().unwrap();
        for s in slugs {
            groups.insert(s.to_string());
        }
        drop(groups);
        svc
    }

    pub fn mark_existing(&self, slug: &str, name: &str) {
        self.existing.lock().unwrap().insert(key(slug, name));
    }

    pub fn list_call_count(&self, slug: &str) -> usize {
        *self.list_calls.lock().unwrap().get(slug).unwrap_or(&0)
    }
}

pub fn key(slug: &str, name: &str) -> String {
    format!("{slug}/{name}")
}

#[async_trait::async_trait]
impl SchemaService for MockService {
    async fn list_groups(&self, object_type: &str) -> Result<Vec<GroupDescriptor>, ClientError> {
        *self
            .list_calls
            .lock()
            .unwrap()
            .entry(object_type.to_string())
            .or_insert(0) += 1;

        if self.fail_group_listing.contains(object_type) {
            return Err(ClientError::Api {
                status: 500,
                body: "listing failed".to_string(),
            });
        }

        let has_group = self.groups.lock().unwrap().contains(object_type);
        Ok(if has_group {
            vec![GroupDescriptor {
                name: PROPERTY_GROUP_NAME.to_string(),
                label: None,
            }]
        } else {
            Vec::new()
        })
    }

    async fn create_group(
        &self,
        object_type: &str,
        _name: &str,
        _label: &str,
    ) -> Result<(), ClientError> {
        self.groups.lock().unwrap().insert(object_type.to_string());
        Ok(())
    }

    async fn property_exists(&self, object_type: &str, name: &str) -> Existence {
        if self.ambiguous.contains(name) {
            return Existence::Unknown {
                status: Some(500),
                detail: "flaky upstream".to_string(),
            };
        }
        if self.existing.lock().unwrap().contains(&key(object_type, name)) {
            Existence::Exists
        } else {
            Existence::Absent
        }
    }

    async fn create_property(
        &self,
        object_type: &str,
        payload: &PropertyPayload,
    ) -> CreateOutcome {
        if self.duplicate_labels.contains(&payload.name) {
            return CreateOutcome::DuplicateLabel;
        }
        if self.failing_creates.contains(&payload.name) {
            return CreateOutcome::Failed {
                status: Some(400),
                detail: "validation failed".to_string(),
            };
        }

        self.existing
            .lock()
            .unwrap()
            .insert(key(object_type, &payload.name));
        self.created
            .lock()
            .unwrap()
            .push((object_type.to_string(), payload.clone()));
        CreateOutcome::Created
    }
}

/// Row constructor shorthand for scenarios.
pub fn row(name: &str, property_type: &str, options: &str, object_type: &str) -> cps_schema::PropertyRequest {
    cps_schema::PropertyRequest {
        name: name.to_string(),
        property_type: property_type.to_string(),
        options: options.to_string(),
        object_type: object_type.to_string(),
    }
}
