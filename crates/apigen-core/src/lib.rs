//! apigen Core Library
//!
//! This library provides the core functionality for generating typed data
//! models and service-interface declarations from OpenAPI specifications,
//! rendered through user-supplied Tera templates.

pub mod builders;
pub mod config;
pub mod error;
pub mod generate;
pub mod openapi;
pub mod render;
pub mod resolver;

pub use crate::{
    config::Config,
    error::{Error, Result},
    generate::generate,
    openapi::ApiDocument,
    render::Renderer,
};
