//! apigen CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.

// Internal imports (std, crate)
use std::path::PathBuf;
use std::process::ExitCode;

// External imports (alphabetized)
use apigen_core::Config;
use clap::Parser;

#[derive(Parser)]
#[command(name = "apigen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    // TODO: Add future subcommands here (e.g., Validate, ListTemplates, etc.)
    /// Generate models and API interfaces from an OpenAPI spec
    Generate {
        /// Path to the OpenAPI spec file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,
        /// Output directory for generated code
        #[arg(short, long)]
        output: PathBuf,
        /// Directory containing the Tera templates
        #[arg(short, long)]
        templates: PathBuf,
        /// Namespace for the generated code
        #[arg(short, long)]
        namespace: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            input,
            output,
            templates,
            namespace,
        } => {
            let config = Config::new(
                input.to_string_lossy(),
                output.to_string_lossy(),
                templates.to_string_lossy(),
                namespace.clone(),
            );

            if let Err(e) = apigen_core::generate(&config).await {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }

            println!("Generated code in: {}", output.display());
            ExitCode::SUCCESS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_arguments_are_mandatory() {
        let result = Cli::try_parse_from(["apigen", "generate", "--input", "spec.yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_full_invocation() {
        let cli = Cli::try_parse_from([
            "apigen",
            "generate",
            "--input",
            "spec.yaml",
            "--output",
            "out",
            "--templates",
            "templates",
            "--namespace",
            "Acme.Api",
        ])
        .unwrap();
        let Commands::Generate {
            input,
            output,
            templates,
            namespace,
        } = cli.command;
        assert_eq!(input, PathBuf::from("spec.yaml"));
        assert_eq!(output, PathBuf::from("out"));
        assert_eq!(templates, PathBuf::from("templates"));
        assert_eq!(namespace, "Acme.Api");
    }
}
