use crate::error::Error;
use crate::sink::{MessageKind, MessageSink};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;

/// REST documentation from source - list the resources declared with path and HTTP verb attributes
#[derive(Parser, Debug)]
#[command(name = "restdoc-from-source")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the Rust project directory
    #[arg(value_name = "PROJECT_PATH")]
    pub project_path: PathBuf,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per message, as emitted by the processor
    Text,
    /// Messages routed to the logger at info level
    Log,
    /// JSON route listing
    Json,
    /// YAML route listing
    Yaml,
}

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_parsed: usize,
    pub containers: usize,
    pub methods: usize,
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.project_path.exists() {
        return Err(Error::InvalidArgument(format!(
            "Project path does not exist: {}",
            args.project_path.display()
        ))
        .into());
    }

    if !args.project_path.is_dir() {
        return Err(Error::InvalidArgument(format!(
            "Project path is not a directory: {}",
            args.project_path.display()
        ))
        .into());
    }

    if args.output_format == OutputFormat::Log && args.output_path.is_some() {
        return Err(Error::InvalidArgument(
            "--output cannot be combined with the log format".to_string(),
        )
        .into());
    }

    info!("Project path: {}", args.project_path.display());
    info!("Output format: {:?}", args.output_format);
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<RunSummary> {
    use crate::listing::RouteListing;
    use crate::parser::{AstParser, ParsedFile};
    use crate::processor::{Processor, RestDocumentationProcessor};
    use crate::round::Round;
    use crate::serializer::{serialize_json, serialize_yaml, write_to_file};
    use crate::sink::{LogSink, WriterSink};
    use crate::walker::SourceWalker;

    info!("Scanning project directory...");
    let walker = SourceWalker::new(args.project_path.clone());
    let walk_result = walker.walk()?;

    info!("Found {} Rust files", walk_result.rust_files.len());

    info!("Parsing Rust files...");
    let mut skipped = walk_result.warnings.clone();
    let mut parsed_files: Vec<ParsedFile> = Vec::new();
    let parse_results = AstParser::parse_files(&walk_result.rust_files);
    for (path, result) in walk_result.rust_files.iter().zip(parse_results) {
        match result {
            Ok(parsed) => parsed_files.push(parsed),
            Err(e) => {
                debug!("Skipping file due to parse error: {}", e);
                skipped.push(format!("Skipped {}: {:#}", path.display(), e));
            }
        }
    }

    info!("Successfully parsed {} files", parsed_files.len());

    let round = Round::from_parsed(&parsed_files);
    let listing = RouteListing::collect(&round);
    if listing.containers.is_empty() {
        log::warn!("No resource containers found in the project");
    }

    match args.output_format {
        OutputFormat::Text => {
            let mut processor = RestDocumentationProcessor::new();
            if let Some(output_path) = &args.output_path {
                let mut sink = WriterSink::new(Vec::new());
                report_skipped(&skipped, &mut sink);
                processor.process(&round, &mut sink);
                let content = String::from_utf8_lossy(&sink.into_inner()).into_owned();
                write_to_file(&content, output_path)?;
                info!("Successfully wrote report to {}", output_path.display());
            } else {
                let mut sink = WriterSink::new(std::io::stdout().lock());
                report_skipped(&skipped, &mut sink);
                processor.process(&round, &mut sink);
                sink.into_inner();
            }
        }
        OutputFormat::Log => {
            report_skipped(&skipped, &mut LogSink);
            RestDocumentationProcessor::new().process(&round, &mut LogSink);
        }
        OutputFormat::Json | OutputFormat::Yaml => {
            let content = if args.output_format == OutputFormat::Json {
                serialize_json(&listing)?
            } else {
                serialize_yaml(&listing)?
            };

            if let Some(output_path) = &args.output_path {
                write_to_file(&content, output_path)?;
                info!("Successfully wrote route listing to {}", output_path.display());
            } else {
                println!("{}", content);
            }
        }
    }

    let summary = RunSummary {
        files_scanned: walk_result.rust_files.len(),
        files_parsed: parsed_files.len(),
        containers: listing.containers.len(),
        methods: listing.method_count(),
    };

    info!("Summary:");
    info!("  - Files scanned: {}", summary.files_scanned);
    info!("  - Files parsed: {}", summary.files_parsed);
    info!("  - Resource containers: {}", summary.containers);
    info!("  - Resource methods: {}", summary.methods);

    Ok(summary)
}

/// Reports files left out of the round as warnings, ahead of the processor's notes
fn report_skipped(skipped: &[String], sink: &mut dyn MessageSink) {
    for warning in skipped {
        sink.print_message(MessageKind::Warning, warning);
    }
}
