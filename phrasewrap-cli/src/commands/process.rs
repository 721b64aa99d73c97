//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, LineRecord, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use crate::separator::decode_separator;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use phrasewrap_host::{
    parse_separator, run, MemoryDocument, MemorySelection, TextRange, WeightTable,
    DEFAULT_SEPARATOR,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Model JSON file (weight table)
    #[arg(short, long, value_name = "FILE", env = "PHRASEWRAP_MODEL")]
    pub model: Option<PathBuf>,

    /// Separator inserted between phrases (default: U+200B)
    #[arg(short, long, value_name = "CHAR", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rewritten text, one input line per output line
    Text,
    /// JSON array of line records with phrases and break flags
    Json,
    /// Markdown numbered list of phrases
    Markdown,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting phrase segmentation");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let separator = self.resolve_separator(&config)?;
        let format = self.resolve_format(&config)?;
        let model_path = self
            .model
            .clone()
            .or_else(|| config.segmentation.model.clone())
            .ok_or(CliError::MissingModel)?;

        let weights = WeightTable::from_file(&model_path)
            .with_context(|| format!("Failed to load model: {}", model_path.display()))?;
        let files = resolve_patterns(&self.input)?;
        log::info!("Processing {} files", files.len());

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for path in &files {
            let records = process_file(path, &weights, &separator)?;
            let phrases: usize = records.iter().map(|r| r.phrases.len()).sum();
            for record in &records {
                formatter.format_line(record)?;
            }
            progress.file_completed(&path.display().to_string(), phrases);
        }

        formatter.finish()?;
        progress.finish();
        Ok(())
    }

    fn resolve_separator(&self, config: &CliConfig) -> Result<String> {
        let raw = self
            .separator
            .as_deref()
            .or(config.segmentation.separator.as_deref())
            .unwrap_or(DEFAULT_SEPARATOR);
        let separator = decode_separator(raw)?;
        parse_separator(&separator)?;
        Ok(separator)
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format: {}",
                config.output.default_format
            ))
            .into()
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when called from tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Segment every line of `path` and return one record per line
pub fn process_file(
    path: &Path,
    weights: &WeightTable,
    separator: &str,
) -> Result<Vec<LineRecord>> {
    let text = FileReader::read_text(path)?;
    let mut document = FileReader::document_from_text(&text);
    let summary = run(&mut document, weights, separator)
        .with_context(|| format!("Failed to process {}", path.display()))?;
    log::debug!(
        "{}: {} lines rewritten, {} blank",
        path.display(),
        summary.ranges,
        summary.skipped
    );

    Ok(collect_records(
        &path.display().to_string(),
        &text,
        &document,
        separator,
    ))
}

/// Pair every source line with its rewritten item; text-less items keep the
/// source line as-is
fn collect_records(
    file: &str,
    source: &str,
    document: &MemoryDocument,
    separator: &str,
) -> Vec<LineRecord> {
    let MemorySelection::Items(items) = &document.selection else {
        return Vec::new();
    };

    items
        .iter()
        .zip(FileReader::split_lines(source))
        .enumerate()
        .map(|(index, (item, (line, line_ending)))| {
            let (contents, phrases, no_break) = match &item.text {
                Some(range) => {
                    let contents = range.contents();
                    let phrases = if contents.is_empty() {
                        Vec::new()
                    } else {
                        contents.split(separator).map(String::from).collect()
                    };
                    (contents, phrases, range.no_break_flags())
                }
                None => (line.to_string(), Vec::new(), Vec::new()),
            };
            LineRecord {
                file: file.to_string(),
                line: index + 1,
                contents,
                phrases,
                no_break,
                line_ending,
            }
        })
        .collect()
}
