//! Static lookup tables: CSV type descriptors and object-type slugs.
//!
//! Both tables are fixed at compile time. A miss in the type table is a
//! per-row error for the caller, never a fallback; a miss in the object-type
//! table passes the name through unchanged (the CRM accepts custom object
//! slugs directly) unless the name is empty.

use serde::Serialize;

// ---------------------------------------------------------------------------
// API data type
// ---------------------------------------------------------------------------

/// The CRM's allowed property data types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiType {
    String,
    Enumeration,
    Number,
    Bool,
    Datetime,
    Date,
    PhoneNumber,
}

impl ApiType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiType::String => "string",
            ApiType::Enumeration => "enumeration",
            ApiType::Number => "number",
            ApiType::Bool => "bool",
            ApiType::Datetime => "datetime",
            ApiType::Date => "date",
            ApiType::PhoneNumber => "phone_number",
        }
    }
}

// ---------------------------------------------------------------------------
// Type mapping
// ---------------------------------------------------------------------------

/// The (type, fieldType, multiple) triple a CSV type descriptor maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    pub api_type: ApiType,
    /// The UI/input widget classification, distinct from the data type.
    pub field_type: &'static str,
    pub multiple: bool,
}

impl TypeMapping {
    const fn new(api_type: ApiType, field_type: &'static str) -> Self {
        Self {
            api_type,
            field_type,
            multiple: false,
        }
    }

    const fn multi(api_type: ApiType, field_type: &'static str) -> Self {
        Self {
            api_type,
            field_type,
            multiple: true,
        }
    }
}

/// Translate a CSV `Property Type` descriptor into the CRM field model.
///
/// Returns `None` for any descriptor outside the fixed table; the caller
/// treats that as a per-row error, not a fatal one.
pub fn map_property_type(raw: &str) -> Option<TypeMapping> {
    let m = match raw {
        "Text" | "Single-line Text" | "HubSpot User" => {
            TypeMapping::new(ApiType::String, "text")
        }
        "Multi-line Text" => TypeMapping::new(ApiType::String, "textarea"),
        "Number" | "Currency Number" | "Unformatted Number" => {
            TypeMapping::new(ApiType::Number, "number")
        }
        "Dropdown" => TypeMapping::new(ApiType::Enumeration, "select"),
        "Multiple Checkboxes" => TypeMapping::multi(ApiType::Enumeration, "select"),
        "Single Checkbox" => TypeMapping::new(ApiType::Bool, "booleancheckbox"),
        "Date Picker" => TypeMapping::new(ApiType::Date, "date"),
        _ => return None,
    };
    Some(m)
}

/// Whether a CSV type descriptor carries an options list.
pub fn supports_options(raw: &str) -> bool {
    matches!(raw, "Dropdown" | "Multiple Checkboxes" | "Single Checkbox")
}

// ---------------------------------------------------------------------------
// Object-type mapping
// ---------------------------------------------------------------------------

/// Map a CSV object-type name to the API endpoint slug.
///
/// Known names map to their plural slugs; unmapped non-empty names pass
/// through unchanged. Empty (after trim) returns `None`; the row is an
/// error for the caller.
pub fn object_type_slug(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let slug = match raw {
        "Contact" => "contacts",
        "Company" => "companies",
        "Deal" => "deals",
        other => other,
    };
    Some(slug.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
