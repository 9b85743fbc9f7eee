//! Name normalization for CRM property identifiers.
//!
//! Two flavours live here, and they are deliberately different:
//!
//! - [`property_api_name`] is the full normalization applied to a property
//!   label to derive its internal API name (strips punctuation).
//! - [`option_value`] is the lighter normalization applied to enumeration
//!   option labels (lowercase + spaces only; punctuation is kept so option
//!   values stay distinguishable).
//!
//! Both are total over any input string and never fail.

// ---------------------------------------------------------------------------
// Property API name
// ---------------------------------------------------------------------------

/// Derive the internal API name for a property from its human label.
///
/// Rules, applied in order:
/// 1. drop every character that is not an ASCII letter, digit, space, or
///    underscore;
/// 2. trim leading/trailing whitespace;
/// 3. lowercase;
/// 4. replace each remaining space with an underscore.
///
/// Underscores are retained in step 1 so the function is idempotent:
/// `property_api_name(property_api_name(x)) == property_api_name(x)`.
/// The output alphabet is exactly `[a-z0-9_]`.
pub fn property_api_name(original: &str) -> String {
    let cleaned: String = original
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '_')
        .collect();

    cleaned.trim().to_ascii_lowercase().replace(' ', "_")
}

// ---------------------------------------------------------------------------
// Option value
// ---------------------------------------------------------------------------

/// Derive the stored value for an enumeration option from its label.
///
/// Lowercase + spaces-to-underscores only; no character stripping, so labels
/// like `"A/B"` keep their punctuation in the value.
pub fn option_value(label: &str) -> String {
    label.to_ascii_lowercase().replace(' ', "_")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
