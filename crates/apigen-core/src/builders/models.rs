//! Model descriptor construction.
//!
//! Builds one [`ModelDescriptor`] per named schema in the document's schema
//! table, in table order, with property declaration order preserved.

// Internal imports (std, crate)
use crate::openapi::SchemaNode;
use crate::resolver;

// External imports (alphabetized)
use indexmap::IndexMap;
use serde::Serialize;

/// Template context for one generated model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    /// Model name; equals the schema's table key
    pub name: String,
    /// Properties in declaration order
    pub properties: Vec<PropertyDescriptor>,
}

/// One property of a generated model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    /// Property name as declared in the schema
    pub name: String,
    /// Resolved target type name
    pub type_name: String,
    /// Whether the name appears in the owning schema's required set
    pub is_required: bool,
}

/// Build one model descriptor per named schema, in schema-table order.
///
/// A schema with zero properties (or a non-object schema in the table)
/// yields a model with an empty property list; there is no error path here.
pub fn build_models(schemas: &IndexMap<String, SchemaNode>) -> Vec<ModelDescriptor> {
    schemas
        .iter()
        .map(|(name, schema)| ModelDescriptor {
            name: name.clone(),
            properties: build_properties(schema),
        })
        .collect()
}

fn build_properties(schema: &SchemaNode) -> Vec<PropertyDescriptor> {
    let SchemaNode::Object {
        properties,
        required,
    } = schema
    else {
        return Vec::new();
    };

    properties
        .iter()
        .map(|(name, property)| PropertyDescriptor {
            name: name.clone(),
            type_name: resolver::resolve(property),
            is_required: required.contains(name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema_table(value: serde_json::Value) -> IndexMap<String, SchemaNode> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_models_follow_table_order() {
        let schemas = schema_table(json!({
            "Order": {"type": "object", "properties": {"id": {"type": "integer", "format": "int64"}}},
            "Customer": {"type": "object", "properties": {"name": {"type": "string"}}}
        }));
        let models = build_models(&schemas);
        let names: Vec<_> = models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Order", "Customer"]);
    }

    #[test]
    fn test_property_types_and_required_flags() {
        let schemas = schema_table(json!({
            "Pet": {
                "type": "object",
                "properties": {
                    "id": {"type": "integer", "format": "int64"},
                    "name": {"type": "string"},
                    "tags": {"type": "array", "items": {"type": "string"}},
                    "owner": {"$ref": "#/components/schemas/Customer"}
                },
                "required": ["id", "name"]
            }
        }));
        let models = build_models(&schemas);
        let pet = &models[0];
        assert_eq!(pet.name, "Pet");

        let names: Vec<_> = pet.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "tags", "owner"]);

        let types: Vec<_> = pet
            .properties
            .iter()
            .map(|p| p.type_name.as_str())
            .collect();
        assert_eq!(types, vec!["long", "string", "List<string>", "Customer"]);

        let required: Vec<_> = pet.properties.iter().map(|p| p.is_required).collect();
        assert_eq!(required, vec![true, true, false, false]);
    }

    #[test]
    fn test_schema_without_properties_yields_empty_model() {
        let schemas = schema_table(json!({
            "Empty": {"type": "object"},
            "Alias": {"type": "string"}
        }));
        let models = build_models(&schemas);
        assert_eq!(models.len(), 2);
        assert!(models[0].properties.is_empty());
        assert!(models[1].properties.is_empty());
    }
}
