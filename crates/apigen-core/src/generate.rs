//! Code generation pipeline for apigen.
//!
//! A single forward pass: load the spec, build model descriptors, build
//! controller groups, and render each descriptor to its own output file.
//! The first fatal error aborts the run; files already written stay on disk.

use std::path::Path;

use crate::{
    builders::{build_models, group_operations},
    config::Config,
    error::Result,
    openapi::ApiDocument,
    render::Renderer,
};

/// Main entry point for code generation
pub async fn generate(config: &Config) -> Result<()> {
    // 1. Reject unusable configuration up front
    config.validate()?;

    // 2. Load the OpenAPI document
    let document = ApiDocument::from_file(&config.spec_path).await?;

    // 3. Set up the renderer (templates load eagerly here)
    let renderer = Renderer::new(
        Path::new(&config.template_dir),
        Path::new(&config.output_dir),
        &config.namespace,
    )?;

    // 4. One model per named schema
    let models = build_models(document.schemas());
    log::info!("Generating {} model(s)", models.len());
    for model in &models {
        renderer.render_model(model).await?;
    }

    // 5. One interface per controller group
    let groups = group_operations(document.paths());
    log::info!("Generating {} interface(s)", groups.len());
    for group in &groups {
        renderer.render_interface(group).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tokio::fs;

    const SPEC: &str = r##"
    {
        "openapi": "3.0.0",
        "info": {"title": "Petstore", "version": "1.0.0"},
        "paths": {
            "/pets": {
                "get": {
                    "operationId": "listPets",
                    "responses": {
                        "200": {"content": {"application/json": {"schema": {
                            "type": "array",
                            "items": {"$ref": "#/components/schemas/Pet"}
                        }}}}
                    }
                },
                "post": {
                    "operationId": "createPet",
                    "requestBody": {"content": {"application/json": {"schema": {
                        "$ref": "#/components/schemas/Pet"
                    }}}},
                    "responses": {"201": {"content": {"application/json": {"schema": {
                        "$ref": "#/components/schemas/Pet"
                    }}}}}
                }
            },
            "/orders/{id}": {
                "get": {"operationId": "getOrder", "responses": {"200": {"description": "ok"}}}
            }
        },
        "components": {"schemas": {
            "Pet": {
                "type": "object",
                "properties": {
                    "id": {"type": "integer", "format": "int64"},
                    "name": {"type": "string"}
                },
                "required": ["id"]
            },
            "Order": {"type": "object", "properties": {"total": {"type": "number"}}}
        }}
    }
    "##;

    async fn setup(root: &Path) -> Result<Config> {
        let spec_path = root.join("openapi.json");
        fs::write(&spec_path, SPEC).await?;

        let template_dir = root.join("templates");
        fs::create_dir_all(&template_dir).await?;
        fs::write(
            template_dir.join("model.tera"),
            "// {{ namespace }}\n{{ model.name }}:{% for p in model.properties %} {{ p.name }}={{ p.type_name }}{% endfor %}\n",
        )
        .await?;
        fs::write(
            template_dir.join("api.tera"),
            "// {{ namespace }}\nI{{ interface.name }}Api:{% for op in interface.operations %} {{ op.method }} {{ op.path }} -> {{ op.response_type }}{% endfor %}\n",
        )
        .await?;

        Ok(Config::new(
            spec_path.to_string_lossy(),
            root.join("out").to_string_lossy(),
            template_dir.to_string_lossy(),
            "Acme.Api",
        ))
    }

    #[tokio::test]
    async fn test_generate_end_to_end() -> Result<()> {
        let dir = tempdir()?;
        let config = setup(dir.path()).await?;

        generate(&config).await?;

        let out = dir.path().join("out");
        let pet = fs::read_to_string(out.join("Models/Pet.cs")).await?;
        assert_eq!(pet, "// Acme.Api\nPet: id=long name=string\n");

        let order = fs::read_to_string(out.join("Models/Order.cs")).await?;
        assert_eq!(order, "// Acme.Api\nOrder: total=decimal\n");

        let pets_api = fs::read_to_string(out.join("Interfaces/IPetsApi.cs")).await?;
        assert_eq!(
            pets_api,
            "// Acme.Api\nIPetsApi: GET /pets -> List<Pet> POST /pets -> Pet\n"
        );

        let orders_api = fs::read_to_string(out.join("Interfaces/IOrdersApi.cs")).await?;
        assert_eq!(
            orders_api,
            "// Acme.Api\nIOrdersApi: GET /orders/{id} -> void\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_generate_is_idempotent() -> Result<()> {
        let dir = tempdir()?;
        let config = setup(dir.path()).await?;

        generate(&config).await?;
        let first = fs::read_to_string(dir.path().join("out/Models/Pet.cs")).await?;

        generate(&config).await?;
        let second = fs::read_to_string(dir.path().join("out/Models/Pet.cs")).await?;

        assert_eq!(first, second);
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_namespace() -> Result<()> {
        let dir = tempdir()?;
        let mut config = setup(dir.path()).await?;
        config.namespace = String::new();

        let result = generate(&config).await;
        assert!(matches!(result, Err(crate::Error::Config(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_missing_spec_fails() -> Result<()> {
        let dir = tempdir()?;
        let mut config = setup(dir.path()).await?;
        config.spec_path = dir.path().join("missing.json").to_string_lossy().to_string();

        let result = generate(&config).await;
        assert!(result.is_err());
        Ok(())
    }
}
