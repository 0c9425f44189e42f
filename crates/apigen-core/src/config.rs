//! Configuration management for apigen code generation.
//!
//! This module defines the `Config` struct holding the four inputs a
//! generation run needs: the spec file, the output directory, the templates
//! directory, and the target namespace. The configuration can be created
//! programmatically (the CLI does this from its arguments) or loaded from a
//! YAML file for scripted use.
//!
//! # Examples
//!
//! ```
//! use apigen_core::config::Config;
//!
//! let config = Config::new("openapi.yaml", "generated", "templates", "Acme.Api");
//! assert_eq!(config.namespace, "Acme.Api");
//! ```

// Internal imports (std, crate)
use std::path::Path;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Configuration for one generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the OpenAPI specification file (YAML or JSON)
    pub spec_path: String,

    /// Output directory for generated code
    pub output_dir: String,

    /// Directory containing the Tera templates
    pub template_dir: String,

    /// Namespace emitted into every generated file
    pub namespace: String,
}

impl Config {
    /// Create a new Config
    pub fn new(
        spec_path: impl Into<String>,
        output_dir: impl Into<String>,
        template_dir: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            spec_path: spec_path.into(),
            output_dir: output_dir.into(),
            template_dir: template_dir.into(),
            namespace: namespace.into(),
        }
    }

    /// Check that every field is usable before a run starts.
    ///
    /// All four inputs are mandatory; an empty one would otherwise surface
    /// later as a confusing I/O or template error.
    pub fn validate(&self) -> crate::Result<()> {
        if self.spec_path.is_empty() {
            return Err(crate::Error::config("spec_path must not be empty"));
        }
        if self.output_dir.is_empty() {
            return Err(crate::Error::config("output_dir must not be empty"));
        }
        if self.template_dir.is_empty() {
            return Err(crate::Error::config("template_dir must not be empty"));
        }
        if self.namespace.is_empty() {
            return Err(crate::Error::config("namespace must not be empty"));
        }
        Ok(())
    }

    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).await?;
        Ok(())
    }
}
