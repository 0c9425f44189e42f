//! OpenAPI document model and loading.
//!
//! This module provides the in-memory object graph for a parsed OpenAPI
//! specification: the schema table, the path table, and the schema type graph
//! itself. Every table is an [`IndexMap`] so iteration follows the order in
//! which entries appear in the source document; response-code and
//! content-type preferences elsewhere in the crate rely on that order.
//!
//! # Examples
//!
//! ```no_run
//! use apigen_core::openapi::ApiDocument;
//! use apigen_core::error::Result;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Load an OpenAPI spec from a file (JSON or YAML)
//! let document = ApiDocument::from_file("openapi.yaml").await?;
//! println!("{} schemas", document.schemas().len());
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

// External imports (alphabetized)
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use tokio::fs;

const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// A parsed OpenAPI specification, reduced to the parts code generation reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiDocument {
    /// Reusable components (only the schema table is consumed)
    #[serde(default)]
    pub components: Components,
    /// Path table: path string -> operations per HTTP method
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
}

/// The `components` section of an OpenAPI document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    /// Named schema table, in source-document order
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaNode>,
}

impl ApiDocument {
    /// Load an OpenAPI spec from a file (supports both YAML and JSON)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        Self::parse_content(&content).map_err(|e| {
            crate::Error::openapi(format!(
                "Failed to parse OpenAPI spec at {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse content as either JSON or YAML
    fn parse_content(content: &str) -> Result<Self, String> {
        // Try to parse as JSON first
        if let Ok(document) = serde_json::from_str(content) {
            return Ok(document);
        }

        // If JSON parsing fails, try YAML
        if let Ok(document) = serde_yaml::from_str(content) {
            return Ok(document);
        }

        Err("content is neither valid JSON nor YAML".to_string())
    }

    /// Named schema table, in source-document order
    pub fn schemas(&self) -> &IndexMap<String, SchemaNode> {
        &self.components.schemas
    }

    /// Path table, in source-document order
    pub fn paths(&self) -> &IndexMap<String, PathItem> {
        &self.paths
    }
}

/// Operations attached to a single path, one slot per HTTP method
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    pub get: Option<Operation>,
    pub put: Option<Operation>,
    pub post: Option<Operation>,
    pub delete: Option<Operation>,
    pub options: Option<Operation>,
    pub head: Option<Operation>,
    pub patch: Option<Operation>,
    pub trace: Option<Operation>,
}

impl PathItem {
    /// Iterate the declared operations in canonical method order
    /// (get, put, post, delete, options, head, patch, trace).
    pub fn operations(&self) -> impl Iterator<Item = (&'static str, &Operation)> {
        [
            ("get", &self.get),
            ("put", &self.put),
            ("post", &self.post),
            ("delete", &self.delete),
            ("options", &self.options),
            ("head", &self.head),
            ("patch", &self.patch),
            ("trace", &self.trace),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
    }
}

/// A single HTTP-method handler attached to a path
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    /// Unique string used to identify the operation
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,
    /// Parameters declared on the operation
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// The request body applicable for this operation
    #[serde(rename = "requestBody")]
    pub request_body: Option<RequestBody>,
    /// Response table keyed by status code, in source-document order
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

/// A single operation parameter
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    /// The name of the parameter
    pub name: String,
    /// The location of the parameter
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Whether the parameter is mandatory (defaults to false when absent)
    pub required: Option<bool>,
    /// The schema defining the type used for the parameter
    pub schema: Option<SchemaNode>,
}

/// Where a parameter is carried in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Path,
    Header,
    Cookie,
}

/// A request body with its content table keyed by media type
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    /// Content table, in source-document order
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// A single response entry in an operation's response table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    /// Content table, in source-document order
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// One media-type entry in a content table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
    /// The schema describing the payload, if declared
    pub schema: Option<SchemaNode>,
}

/// One node of the specification's type graph.
///
/// Classification happens at deserialization time: a `$ref` wins over
/// everything else, then `type: array`, then `type: object` (or a bare
/// `properties` table), and anything left is treated as a primitive. A node
/// that matches none of the mapped primitive kinds still deserializes; the
/// resolver degrades it to the fallback type instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// A `$ref` to a named schema; only the trailing id is kept
    Reference { id: String },
    /// An array of items
    Array { items: Box<SchemaNode> },
    /// A scalar with optional `type`/`format` strings
    Primitive {
        kind: Option<String>,
        format: Option<String>,
    },
    /// An inline object with its property table and required-name set
    Object {
        properties: IndexMap<String, SchemaNode>,
        required: Vec<String>,
    },
}

impl SchemaNode {
    /// The untyped node; resolves to the generic fallback type
    pub fn untyped() -> Self {
        SchemaNode::Primitive {
            kind: None,
            format: None,
        }
    }
}

/// Raw schema shape as it appears in the document, before classification
#[derive(Debug, Default, Deserialize)]
struct RawSchema {
    #[serde(rename = "$ref")]
    reference: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    format: Option<String>,
    items: Option<Box<RawSchema>>,
    #[serde(default)]
    properties: IndexMap<String, RawSchema>,
    #[serde(default)]
    required: Vec<String>,
}

impl From<RawSchema> for SchemaNode {
    fn from(raw: RawSchema) -> Self {
        if let Some(reference) = raw.reference {
            // Keep only the schema name; references are resolved by name,
            // never by structural inlining.
            let id = reference
                .strip_prefix(SCHEMA_REF_PREFIX)
                .unwrap_or(&reference)
                .to_string();
            return SchemaNode::Reference { id };
        }

        match raw.kind.as_deref() {
            Some("array") => {
                // An array without items still generates; the item type
                // degrades to the fallback.
                let items = raw
                    .items
                    .map(|items| SchemaNode::from(*items))
                    .unwrap_or_else(SchemaNode::untyped);
                SchemaNode::Array {
                    items: Box::new(items),
                }
            }
            Some("object") => object_node(raw.properties, raw.required),
            None if !raw.properties.is_empty() => object_node(raw.properties, raw.required),
            _ => SchemaNode::Primitive {
                kind: raw.kind,
                format: raw.format,
            },
        }
    }
}

fn object_node(properties: IndexMap<String, RawSchema>, required: Vec<String>) -> SchemaNode {
    SchemaNode::Object {
        properties: properties
            .into_iter()
            .map(|(name, schema)| (name, SchemaNode::from(schema)))
            .collect(),
        required,
    }
}

impl<'de> Deserialize<'de> for SchemaNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawSchema::deserialize(deserializer).map(SchemaNode::from)
    }
}
