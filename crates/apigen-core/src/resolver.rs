//! Schema type resolution.
//!
//! Maps a [`SchemaNode`] to the C# type name interpolated into templates.
//! The mapping is total: anything outside the fixed primitive table degrades
//! to the generic `object` fallback so generation always completes, even for
//! partially-specified schemas. References are echoed by name and never
//! dereferenced; the referenced schema is assumed to have a generated model
//! of that exact name.

use crate::openapi::SchemaNode;

/// The fallback type for unmapped kind/format pairs and inline objects
pub const FALLBACK_TYPE: &str = "object";

/// Resolve a schema node to its target type name.
///
/// Fixed primitive table:
///
/// | kind    | format    | result     |
/// |---------|-----------|------------|
/// | integer | int64     | `long`     |
/// | integer | (other)   | `int`      |
/// | number  | float     | `float`    |
/// | number  | (other)   | `decimal`  |
/// | boolean | (any)     | `bool`     |
/// | string  | date-time | `DateTime` |
/// | string  | uuid      | `Guid`     |
/// | string  | (other)   | `string`   |
/// | (else)  | (any)     | `object`   |
///
/// Arrays wrap the recursively resolved item type in `List<...>`.
pub fn resolve(node: &SchemaNode) -> String {
    match node {
        SchemaNode::Reference { id } => id.clone(),
        SchemaNode::Array { items } => format!("List<{}>", resolve(items)),
        SchemaNode::Primitive { kind, format } => {
            match (kind.as_deref(), format.as_deref()) {
                (Some("integer"), Some("int64")) => "long",
                (Some("integer"), _) => "int",
                (Some("number"), Some("float")) => "float",
                (Some("number"), _) => "decimal",
                (Some("boolean"), _) => "bool",
                (Some("string"), Some("date-time")) => "DateTime",
                (Some("string"), Some("uuid")) => "Guid",
                (Some("string"), _) => "string",
                _ => FALLBACK_TYPE,
            }
            .to_string()
        }
        SchemaNode::Object { .. } => FALLBACK_TYPE.to_string(),
    }
}
