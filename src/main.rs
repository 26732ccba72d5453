use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

mod cli_output;

use cli_output::{OutputMode, OutputWriter};
use jsdoctor::{
    format_runtime_error, format_unsupported_error, severity_for_category_name, ErrorFormatter,
    ExecutionError, JsDoctorConfig, LanguageDetector,
};

#[derive(Parser)]
#[command(name = "jsdoctor")]
#[command(about = "Check whether code is JavaScript and explain JavaScript errors", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (human, plain, json)
    #[arg(short, long, global = true)]
    format: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess whether source code is JavaScript or another language
    Detect {
        /// Source file (stdin when omitted or "-")
        file: Option<PathBuf>,
    },

    /// Explain a parser error for the given source
    ParseError {
        /// Raw parser error message
        #[arg(short, long)]
        message: String,

        #[arg(short, long)]
        line: Option<usize>,

        #[arg(short, long)]
        column: Option<usize>,

        /// Source file (stdin when omitted or "-")
        file: Option<PathBuf>,
    },

    /// Explain an error raised while running code
    RuntimeError {
        /// Raw runtime error message
        message: String,

        #[arg(short, long)]
        line: Option<usize>,
    },

    /// Describe how well a JavaScript feature is supported
    Unsupported {
        /// Feature name, e.g. setTimeout or fetch
        feature: String,
    },

    /// Show the severity tier for an error category
    Severity {
        /// syntax, language, runtime, unsupported or limit
        category: String,
    },
}

fn read_source(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(&path)
            .map_err(|e| anyhow!("Could not read {}: {}", path.display(), e)),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = JsDoctorConfig::load()?;
    debug!("Config: {:?}", config);

    let mode = match cli.format.as_deref().or(config.output.as_deref()) {
        Some(name) => OutputMode::from_name(name)
            .ok_or_else(|| anyhow!("Unknown format: {}. Supported: human, plain, json", name))?,
        None => OutputMode::auto(),
    };
    let out = OutputWriter::new(mode);

    match cli.command {
        Commands::Detect { file } => {
            let source = read_source(file)?;
            let result = LanguageDetector::with_config(&config).detect(&source);
            out.detection(&result);
        }

        Commands::ParseError {
            message,
            line,
            column,
            file,
        } => {
            let source = read_source(file)?;
            let error = ExecutionError {
                message,
                line,
                column,
            };
            let formatted = ErrorFormatter::with_config(&config).format_parse_error(&error, &source);
            out.diagnosis(&formatted);
        }

        Commands::RuntimeError { message, line } => {
            out.diagnosis(&format_runtime_error(&message, line));
        }

        Commands::Unsupported { feature } => {
            out.diagnosis(&format_unsupported_error(&feature));
        }

        Commands::Severity { category } => {
            out.severity(severity_for_category_name(&category));
        }
    }

    Ok(())
}
