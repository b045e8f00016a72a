//! Logical type name to EDM primitive type mapping

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Logical type names and the EDM primitive types they map to
pub const EDM_TYPE_TABLE: [(&str, &str); 12] = [
    ("boolean", "Edm.Boolean"),
    ("date", "Edm.DateTime"),
    ("dateTime", "Edm.DateTime"),
    ("dateTimeOffset", "Edm.DateTimeOffset"),
    ("decimal", "Edm.Decimal"),
    ("float", "Edm.Float"),
    ("guid", "Edm.Guid"),
    ("int", "Edm.Int32"),
    ("int16", "Edm.Int16"),
    ("int32", "Edm.Int32"),
    ("int64", "Edm.Int64"),
    ("string", "Edm.String"),
];

static EDM_TYPES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| EDM_TYPE_TABLE.into_iter().collect());

/// Lowercase the first character only; `"DateTime"` becomes `"dateTime"`,
/// `"INT32"` becomes `"iNT32"`.
fn first_char_to_lower(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lookup(name: &str) -> Option<&'static str> {
    EDM_TYPES.get(first_char_to_lower(name).as_str()).copied()
}

/// Map a logical type name to its EDM primitive type name.
///
/// Only the first character is case-folded before the lookup. Names that are
/// not in [`EDM_TYPE_TABLE`] are returned unchanged, which lets qualified
/// names such as `NS.Address` pass through.
///
/// # Example
///
/// ```rust
/// use edm_metadata_sdk::model::to_edm_type;
///
/// assert_eq!(to_edm_type("Int32"), "Edm.Int32");
/// assert_eq!(to_edm_type("INT32"), "INT32");
/// assert_eq!(to_edm_type("NS.Address"), "NS.Address");
/// ```
pub fn to_edm_type(name: &str) -> String {
    match lookup(name) {
        Some(edm) => edm.to_string(),
        None => name.to_string(),
    }
}

/// Whether `name` resolves to an EDM primitive type
pub fn is_primitive_type(name: &str) -> bool {
    lookup(name).is_some()
}
