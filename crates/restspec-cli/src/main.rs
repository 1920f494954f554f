use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use restspec_core::config::{self, CONFIG_FILE_NAME, RestspecConfig};
use restspec_core::route::{RouteSource, WebService, registry};
use restspec_core::swagger::{self, Swagger};
use restspec_core::transform::build_swagger;

#[derive(Parser)]
#[command(
    name = "restspec",
    about = "Compile route registries into Swagger 2.0 documents",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Swagger document from a route registry
    Generate {
        /// Path to the route registry file (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Where to write the document (.json, .yaml or .yml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a route registry loads
    Validate {
        /// Path to the route registry file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Summarize the operations a route registry would produce
    Inspect {
        /// Path to the route registry file
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new restspec configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output } => cmd_generate(input, output),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "restspec", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<RestspecConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    let config = config::load_config(&config_path)?;
    if config.is_some() {
        log::debug!("using config {}", config_path.display());
    }
    Ok(config)
}

fn load_registry(path: &Path) -> Result<Vec<WebService>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let services = match ext {
        "json" => registry::from_json(&content),
        _ => registry::from_yaml(&content),
    }
    .with_context(|| format!("failed to load routes from {}", path.display()))?;
    Ok(services)
}

fn build_document(services: &[WebService], cfg: &RestspecConfig) -> Swagger {
    let sources: Vec<&dyn RouteSource> = services.iter().map(|s| s as &dyn RouteSource).collect();
    build_swagger(&cfg.swagger_config(), &sources)
}

fn render(document: &Swagger, output: &Path) -> Result<String> {
    let ext = output.extension().and_then(|e| e.to_str()).unwrap_or("json");
    let content = match ext {
        "yaml" | "yml" => swagger::to_yaml(document)?,
        _ => swagger::to_json(document)?,
    };
    Ok(content)
}

fn cmd_generate(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    let services = load_registry(&input)?;
    let document = build_document(&services, &cfg);
    let content = render(&document, &output)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(&output, content).with_context(|| format!("failed to write {}", output.display()))?;

    eprintln!(
        "Generated {} paths from {} services into {}",
        document.paths.len(),
        services.len(),
        output.display()
    );
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let services = load_registry(&input)?;

    let routes: usize = services.iter().map(|s| s.routes().len()).sum();
    eprintln!("Valid route registry: {}", input.display());
    eprintln!("  Services: {}", services.len());
    eprintln!("  Routes: {}", routes);

    // Also check that every route lands in a path item slot
    let document = build_document(&services, &RestspecConfig::default());
    let operations: usize = document
        .paths
        .values()
        .map(|item| item.operations().count())
        .sum();
    eprintln!("  Paths: {}", document.paths.len());
    eprintln!("  Operations: {}", operations);
    if operations < routes {
        eprintln!(
            "  note: {} routes were dropped or replaced (duplicate path and method, or unsupported method)",
            routes - operations
        );
    }

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let services = load_registry(&input)?;
    let document = build_document(&services, &cfg);

    let summary = build_inspect_summary(&document);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(document: &Swagger) -> serde_json::Value {
    let operations: Vec<serde_json::Value> = document
        .paths
        .iter()
        .flat_map(|(path, item)| {
            item.operations().map(move |(method, op)| {
                serde_json::json!({
                    "method": method.as_str(),
                    "path": path,
                    "operation_id": op.operation_id,
                    "summary": op.summary,
                    "tags": op.tags,
                    "parameters": op.parameters.iter().map(|p| &p.name).collect::<Vec<_>>(),
                    "responses": op.responses.status_codes.keys().collect::<Vec<_>>(),
                })
            })
        })
        .collect();

    serde_json::json!({
        "info": {
            "title": document.info.title,
            "version": document.info.version,
        },
        "paths": document.paths.len(),
        "operations": operations,
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
