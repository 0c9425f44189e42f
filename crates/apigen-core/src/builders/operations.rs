//! Operation grouping and response/request-body type derivation.
//!
//! Path/operation pairs are flattened into controller groups keyed by the
//! first path segment; each operation becomes an [`OperationDescriptor`]
//! carrying its resolved response and request-body type names.

// Internal imports (std, crate)
use crate::openapi::{Operation, ParameterLocation, PathItem, RequestBody, SchemaNode};
use crate::resolver::{self, FALLBACK_TYPE};

// External imports (alphabetized)
use indexmap::IndexMap;
use serde::Serialize;

/// Type name used when an operation has no usable success response
pub const VOID_TYPE: &str = "void";

/// Sentinel group for the root path, which has no non-empty segment
const ROOT_GROUP: &str = "Root";

/// Template context for one generated service interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerGroup {
    /// Group name: the capitalized first path segment
    pub name: String,
    /// Operations in path-table order, then method order within a path
    pub operations: Vec<OperationDescriptor>,
}

/// One operation of a controller group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationDescriptor {
    /// The path the operation is attached to
    pub path: String,
    /// HTTP method, uppercased
    pub method: String,
    /// The operation's declared id, if any
    pub operation_id: Option<String>,
    /// Declared parameters, empty if the operation declares none
    pub parameters: Vec<ParameterDescriptor>,
    /// Resolved success-response type name, or `void`
    pub response_type: String,
    /// Whether a request body object exists at all
    pub has_request_body: bool,
    /// Resolved request-body type name, present iff a request body exists
    pub request_body_type: Option<String>,
}

/// One parameter of an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDescriptor {
    pub name: String,
    pub type_name: String,
    pub location: ParameterLocation,
    pub is_required: bool,
}

/// Result of request-body type derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBodyType {
    /// True whenever a request body object exists, usable content or not
    pub has_body: bool,
    /// The resolved type name; `None` only when there is no body at all
    pub type_name: Option<String>,
}

/// Derive the success-response type for an operation.
///
/// Scans the response table for the first `"200"` or `"201"` key in table
/// order. If the match has content, the first content-type entry wins
/// regardless of its media-type key; a missing entry, empty content, or
/// absent schema all resolve to `void` (or the generic fallback for an
/// entry whose schema is missing).
pub fn resolve_response_type(operation: &Operation) -> String {
    let success = operation
        .responses
        .iter()
        .find(|(status, _)| *status == "200" || *status == "201")
        .map(|(_, response)| response);

    match success {
        Some(response) => match response.content.values().next() {
            Some(media_type) => match &media_type.schema {
                Some(schema) => resolve_payload(schema),
                None => FALLBACK_TYPE.to_string(),
            },
            None => VOID_TYPE.to_string(),
        },
        None => VOID_TYPE.to_string(),
    }
}

/// Derive the request-body type for an operation.
///
/// Only the exact `application/json` content-type key is consulted; any
/// other content type (or a JSON entry without a schema) degrades to the
/// generic fallback while `has_body` still reflects that a body exists.
pub fn resolve_request_body(request_body: Option<&RequestBody>) -> RequestBodyType {
    let Some(body) = request_body else {
        return RequestBodyType {
            has_body: false,
            type_name: None,
        };
    };

    let type_name = body
        .content
        .get("application/json")
        .and_then(|media_type| media_type.schema.as_ref())
        .map(resolve_payload)
        .unwrap_or_else(|| FALLBACK_TYPE.to_string());

    RequestBodyType {
        has_body: true,
        type_name: Some(type_name),
    }
}

// Array payloads wrap the resolved item type; everything else delegates to
// the resolver. Kept as its own path for parity with response handling.
fn resolve_payload(schema: &SchemaNode) -> String {
    match schema {
        SchemaNode::Array { items } => format!("List<{}>", resolver::resolve(items)),
        other => resolver::resolve(other),
    }
}

/// Group every path/operation pair into controller groups.
///
/// The group key is the capitalized first non-empty path segment, so
/// `/users` and `/Users` share one `Users` group. Groups appear in the
/// order their key is first encountered while walking the path table; the
/// root path maps to the `Root` sentinel group.
pub fn group_operations(paths: &IndexMap<String, PathItem>) -> Vec<ControllerGroup> {
    let mut groups: IndexMap<String, Vec<OperationDescriptor>> = IndexMap::new();

    for (path, item) in paths {
        let group = groups.entry(controller_name(path)).or_default();
        for (method, operation) in item.operations() {
            group.push(build_operation(path, method, operation));
        }
    }

    groups
        .into_iter()
        .map(|(name, operations)| ControllerGroup { name, operations })
        .collect()
}

fn build_operation(path: &str, method: &str, operation: &Operation) -> OperationDescriptor {
    let body = resolve_request_body(operation.request_body.as_ref());

    OperationDescriptor {
        path: path.to_string(),
        method: method.to_uppercase(),
        operation_id: operation.operation_id.clone(),
        parameters: operation
            .parameters
            .iter()
            .map(|parameter| ParameterDescriptor {
                name: parameter.name.clone(),
                type_name: parameter
                    .schema
                    .as_ref()
                    .map(resolver::resolve)
                    .unwrap_or_else(|| FALLBACK_TYPE.to_string()),
                location: parameter.location,
                is_required: parameter.required.unwrap_or(false),
            })
            .collect(),
        response_type: resolve_response_type(operation),
        has_request_body: body.has_body,
        request_body_type: body.type_name,
    }
}

fn controller_name(path: &str) -> String {
    let Some(segment) = path.split('/').find(|segment| !segment.is_empty()) else {
        return ROOT_GROUP.to_string();
    };

    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => ROOT_GROUP.to_string(),
    }
}
