//! Wire payload for property creation, and the row -> payload builder.

use serde::Serialize;

use crate::mapping::{supports_options, ApiType, TypeMapping};
use crate::normalizer::{option_value, property_api_name};

// ---------------------------------------------------------------------------
// Input row
// ---------------------------------------------------------------------------

/// One desired property, as read from a CSV row. All fields are the trimmed
/// raw strings from the file; nothing is normalized or validated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRequest {
    /// Human label, e.g. `"VIP Status"`.
    pub name: String,
    /// CSV type descriptor, e.g. `"Single Checkbox"`.
    pub property_type: String,
    /// Comma-separated option labels; empty for non-choice types.
    pub options: String,
    /// CSV object-type name, e.g. `"Contact"`.
    pub object_type: String,
}

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

/// One enumeration option as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyOption {
    /// Original option text, preserved verbatim.
    pub label: String,
    /// Stored value: lowercase, spaces replaced with underscores.
    pub value: String,
}

/// The property-creation request body.
///
/// `multiple` and `options` are omitted from the JSON entirely when absent;
/// the API rejects `"options": null` on non-enumeration types.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyPayload {
    /// Normalized internal name.
    pub name: String,
    /// Original human label.
    pub label: String,
    #[serde(rename = "groupName")]
    pub group_name: String,
    #[serde(rename = "type")]
    pub api_type: ApiType,
    #[serde(rename = "fieldType")]
    pub field_type: String,
    #[serde(skip_serializing_if = "is_false")]
    pub multiple: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<PropertyOption>>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Split a raw comma-separated options string into wire options.
///
/// Tokens are trimmed; empty tokens (e.g. from a trailing comma) are dropped.
/// Input order is preserved and duplicates are **not** removed; a duplicate
/// surfaces as a remote validation error, which is the desired signal.
pub fn parse_options(raw: &str) -> Vec<PropertyOption> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| PropertyOption {
            label: t.to_string(),
            value: option_value(t),
        })
        .collect()
}

/// Build the creation payload for one row.
///
/// The options list is attached only when the row's type descriptor is
/// choice-like **and** the raw option text is non-empty.
pub fn build_payload(
    req: &PropertyRequest,
    mapping: &TypeMapping,
    group_name: &str,
) -> PropertyPayload {
    let options = if supports_options(&req.property_type) && !req.options.is_empty() {
        Some(parse_options(&req.options))
    } else {
        None
    };

    PropertyPayload {
        name: property_api_name(&req.name),
        label: req.name.clone(),
        group_name: group_name.to_string(),
        api_type: mapping.api_type,
        field_type: mapping.field_type.to_string(),
        multiple: mapping.multiple,
        options,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
