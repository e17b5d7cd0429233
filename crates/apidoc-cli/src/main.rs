use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use apidoc_core::config::{self, CONFIG_FILE_NAME, DocConfig};
use apidoc_core::export::EXPORT_FILE_NAME;
use apidoc_core::transform::{operation_id, to_model};
use apidoc_core::validate::validate;
use apidoc_core::{Generator, Source, parse};
use apidoc_samples::TemplateSampleRenderer;

#[derive(Parser)]
#[command(name = "apidoc", about = "API reference documentation generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the documentation model and print it
    Generate {
        /// Path to the API description (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "json")]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check an API description for missing sections
    Validate {
        /// Path to the API description
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Re-emit an API description as indented JSON
    Export {
        /// Path to the API description
        #[arg(short, long)]
        input: PathBuf,

        /// Write to this file (`-` for stdout)
        #[arg(short, long, default_value = EXPORT_FILE_NAME)]
        output: PathBuf,
    },

    /// List the section ids every operation is published under
    Ids {
        /// Path to the API description
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Initialize a new apidoc configuration
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
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            format,
            output,
        } => cmd_generate(input, format, output),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Export { input, output } => cmd_export(input, output),

        Commands::Ids { input } => cmd_ids(input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "apidoc", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<DocConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_source(path: &Path) -> Result<Source> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    let value = match ext {
        "json" => parse::from_json(&content),
        "yaml" | "yml" => parse::from_yaml(&content),
        _ => parse::from_str(&content),
    }
    .with_context(|| format!("failed to parse {}", path.display()))?;

    Ok(Source::Structured(value))
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("  wrote {}", path.display());
        }
        _ => println!("{content}"),
    }
    Ok(())
}

fn cmd_generate(input: PathBuf, format: OutputFormat, output: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let renderer = TemplateSampleRenderer::new()?;
    let mut generator = Generator::with_config(renderer, cfg);

    let docs = generator
        .generate(load_source(&input)?)
        .with_context(|| format!("failed to generate documentation for {}", input.display()))?;

    for warning in &docs.validation.warnings {
        eprintln!("  warning: {warning}");
    }

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(docs)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(docs)?,
    };
    write_output(output.as_deref(), &rendered)?;

    eprintln!(
        "Generated {} sections ({} operations in {} groups)",
        docs.section_ids().len(),
        docs.endpoints.len(),
        docs.nav.groups.len()
    );
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let parsed = parse::load(load_source(&input)?)?;
    let report = validate(&parsed.document);

    let info = parsed.document.info.as_ref();
    eprintln!(
        "Document: {}",
        info.and_then(|i| i.title.as_deref()).unwrap_or("(untitled)")
    );
    eprintln!(
        "  Version: {}",
        info.and_then(|i| i.version.as_deref()).unwrap_or("(none)")
    );
    eprintln!(
        "  Paths: {}",
        parsed.document.paths.as_ref().map_or(0, |p| p.len())
    );

    if report.valid {
        eprintln!("Validation successful.");
    } else {
        for warning in &report.warnings {
            eprintln!("  warning: {warning}");
        }
        eprintln!(
            "Validation finished with {} warning(s); defaults will be used.",
            report.warnings.len()
        );
    }
    Ok(())
}

fn cmd_export(input: PathBuf, output: PathBuf) -> Result<()> {
    let parsed = parse::load(load_source(&input)?)?;
    let json = apidoc_core::export::to_json(&parsed.raw)?;
    write_output(Some(&output), &json)
}

fn cmd_ids(input: PathBuf) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let parsed = parse::load(load_source(&input)?)?;
    let model = to_model(&parsed.document, &cfg.defaults);

    for op in &model.operations {
        println!(
            "{:<40} {:<7} {}",
            op.ids.operation_id,
            op.method.as_str(),
            op.path
        );
    }

    let suffixed = model
        .operations
        .iter()
        .filter(|op| operation_id(&op.path, op.method.as_str()) != op.ids.operation_id)
        .count();
    if suffixed > 0 {
        log::warn!("{suffixed} operation id(s) were suffixed to stay unique");
    }
    Ok(())
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
