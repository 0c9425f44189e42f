//! Template rendering and output writing.
//!
//! Wraps a cached [`Tera`] instance built from the templates directory and
//! renders each descriptor through one of the two fixed templates:
//! `model.tera` for models and `api.tera` for controller interfaces. Every
//! render call produces exactly one output file.

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

use crate::builders::{ControllerGroup, ModelDescriptor};
use crate::error::Result;

// External imports (alphabetized)
use tera::{Context, Tera};
use tokio::fs;

/// Template consumed for each model descriptor
pub const MODEL_TEMPLATE: &str = "model.tera";

/// Template consumed for each controller group
pub const API_TEMPLATE: &str = "api.tera";

/// Renders descriptors through templates and writes the output files
#[derive(Debug)]
pub struct Renderer {
    /// Cached Tera template engine instance
    tera: Tera,
    /// Root directory for generated files
    output_dir: PathBuf,
    /// Target namespace handed to every template
    namespace: String,
}

impl Renderer {
    /// Create a new renderer from a templates directory.
    ///
    /// All files under `template_dir` are loaded into Tera up front, so an
    /// unparsable template fails here rather than mid-run.
    pub fn new(template_dir: &Path, output_dir: &Path, namespace: &str) -> Result<Self> {
        let template_glob = format!("{}/**/*", template_dir.display());
        let tera = Tera::new(&template_glob).map_err(|e| {
            crate::Error::template(format!(
                "Failed to load templates from {}: {}",
                template_dir.display(),
                e
            ))
        })?;

        Ok(Self {
            tera,
            output_dir: output_dir.to_path_buf(),
            namespace: namespace.to_string(),
        })
    }

    /// Render one model descriptor to `Models/{Name}.cs`.
    pub async fn render_model(&self, model: &ModelDescriptor) -> Result<PathBuf> {
        let mut context = Context::new();
        context.insert("model", model);
        context.insert("namespace", &self.namespace);

        let output_path = self
            .output_dir
            .join("Models")
            .join(format!("{}.cs", model.name));
        self.render_to_file(MODEL_TEMPLATE, &context, &output_path)
            .await?;
        Ok(output_path)
    }

    /// Render one controller group to `Interfaces/I{Name}Api.cs`.
    pub async fn render_interface(&self, group: &ControllerGroup) -> Result<PathBuf> {
        let mut context = Context::new();
        context.insert("interface", group);
        context.insert("namespace", &self.namespace);

        let output_path = self
            .output_dir
            .join("Interfaces")
            .join(format!("I{}Api.cs", group.name));
        self.render_to_file(API_TEMPLATE, &context, &output_path)
            .await?;
        Ok(output_path)
    }

    async fn render_to_file(
        &self,
        template_name: &str,
        context: &Context,
        output_path: &Path,
    ) -> Result<()> {
        log::debug!(
            "Rendering template {} -> {}",
            template_name,
            output_path.display()
        );

        self.tera.get_template(template_name).map_err(|e| {
            crate::Error::template(format!("Template not found: {} - {}", template_name, e))
        })?;

        let content = self.tera.render(template_name, context).map_err(|e| {
            crate::Error::template(format!(
                "Failed to render template '{}': {}",
                template_name, e
            ))
        })?;

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(output_path, content).await?;

        log::debug!("Wrote {}", output_path.display());
        Ok(())
    }
}
