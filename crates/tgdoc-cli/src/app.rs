//! CLI Application logic
//!
//! Contains the command-line interface implementation. This is the
//! transport boundary: it owns file I/O, output naming and logging setup,
//! and hands decoded requests to `tgdoc-core`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use tgdoc_core::{export_document, ExportRequest, Settings};
use tgdoc_ooxml::{Document, DocxWriter, OoxmlArchive};

/// Base name used when a request does not name its output
pub const DEFAULT_BASE_NAME: &str = "chat_transcript";

/// Settings file looked up next to the request when `--config` is absent
const SETTINGS_FILE: &str = "tgdoc.toml";

/// Output format for the export command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Word document
    #[default]
    Docx,
    /// Assembled document model as JSON
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Parser)]
#[command(name = "tgdoc")]
#[command(author, version, about = "Chat transcripts to printable documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a chat transcript request to DOCX
    Export {
        /// Request JSON file ({ messages, opts, filename })
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Settings TOML file (defaults to tgdoc.toml next to the input)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "docx")]
        format: ExportFormat,

        /// Output base name, overriding the request's filename
        #[arg(long)]
        name: Option<String>,
    },

    /// Print the paragraphs of a DOCX file
    Inspect {
        /// Input DOCX file
        input: PathBuf,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            input,
            output,
            config,
            format,
            name,
        } => {
            export_command(&input, &output, config.as_deref(), format, name.as_deref())?;
        }
        Commands::Inspect { input } => {
            inspect_command(&input)?;
        }
    }

    Ok(())
}

/// Initialize tracing subscriber for logging
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Execute the export command
///
/// Returns the path of the written file.
pub fn export_command(
    input: &Path,
    output_dir: &Path,
    config: Option<&Path>,
    format: ExportFormat,
    name: Option<&str>,
) -> Result<PathBuf> {
    println!("tgdoc v{}", tgdoc_core::VERSION);
    println!("Exporting: {}", input.display());

    // Check input file exists
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let body = fs::read_to_string(input)
        .with_context(|| format!("Failed to read request: {}", input.display()))?;
    let request = ExportRequest::from_json_str(&body)
        .with_context(|| format!("Failed to decode request: {}", input.display()))?;
    println!("  {} messages", request.messages.len());

    let settings = load_settings(config, input)?;

    let model = export_document(&request, &settings).context("Failed to assemble document")?;
    println!("  {} blocks assembled", model.blocks.len());

    let base_name = sanitize_filename(name.or(request.filename.as_deref()));
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;
    let output_path = output_dir.join(format!("{}.{}", base_name, format.extension()));

    let bytes = match format {
        ExportFormat::Docx => DocxWriter::generate(&model).context("Failed to generate DOCX")?,
        ExportFormat::Json => {
            serde_json::to_vec_pretty(&model).context("Failed to serialize document model")?
        }
    };
    fs::write(&output_path, &bytes)
        .with_context(|| format!("Failed to write output: {}", output_path.display()))?;

    info!(path = %output_path.display(), bytes = bytes.len(), "export written");
    println!("Wrote: {}", output_path.display());

    Ok(output_path)
}

/// Resolve settings from an explicit file, a sibling `tgdoc.toml`, or defaults
fn load_settings(config: Option<&Path>, input: &Path) -> Result<Settings> {
    let path = match config {
        Some(p) => p.to_path_buf(),
        None => {
            let sibling = input
                .parent()
                .unwrap_or(Path::new("."))
                .join(SETTINGS_FILE);
            if !sibling.exists() {
                debug!("no settings file, using defaults");
                return Ok(Settings::default());
            }
            sibling
        }
    };

    println!("  Loading config: {}", path.display());
    Settings::load(&path).with_context(|| format!("Failed to load config: {}", path.display()))
}

/// Execute the inspect command
pub fn inspect_command(input: &Path) -> Result<()> {
    let archive = OoxmlArchive::open(input)
        .with_context(|| format!("Failed to open DOCX file: {}", input.display()))?;
    let document = Document::from_archive(&archive)
        .with_context(|| format!("Failed to parse document: {}", input.display()))?;

    for (i, paragraph) in document.paragraphs.iter().enumerate() {
        println!("{:>4}  {}", i, paragraph.plain_text());
    }

    Ok(())
}

/// Make a requested name safe to use as a file stem
///
/// Every character outside `[A-Za-z0-9_-]` becomes `_`. A missing or empty
/// name falls back to [`DEFAULT_BASE_NAME`].
pub fn sanitize_filename(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect(),
        _ => DEFAULT_BASE_NAME.to_string(),
    }
}
