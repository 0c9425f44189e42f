//! Descriptor builders: the template-ready intermediate representation.
//!
//! These builders turn the parsed document graph into plain serializable
//! descriptors. Descriptors are immutable snapshots built once per generation
//! run; type names inside them are opaque strings that templates interpolate
//! without further interpretation.

pub mod models;
pub mod operations;

pub use models::{build_models, ModelDescriptor, PropertyDescriptor};
pub use operations::{
    group_operations, resolve_request_body, resolve_response_type, ControllerGroup,
    OperationDescriptor, ParameterDescriptor, RequestBodyType,
};
