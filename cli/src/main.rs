//! rowpress CLI - blog content rendering tool
//!
//! Reads row payloads (JSON, as delivered by the backend) and renders them
//! to HTML, plain text, or JSON. The host application decides which view to
//! produce by picking a subcommand; there is no ambient dispatch.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use rowpress::{render, rows_from_json, History, JsonFormat, Result, Rowpress};

#[derive(Parser)]
#[command(name = "rowpress")]
#[command(version)]
#[command(about = "Render blog content rows to HTML, text, and JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render rows to HTML
    Html {
        /// Input rows file (JSON array)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Drop style attributes from the output
        #[arg(long)]
        no_styles: bool,

        /// Disable lazy image loading
        #[arg(long)]
        no_lazy: bool,

        /// Fail on rows without content instead of rendering them empty
        #[arg(long)]
        strict: bool,
    },

    /// Render rows to plain text
    Text {
        /// Input rows file (JSON array)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Fail on rows without content instead of rendering them empty
        #[arg(long)]
        strict: bool,
    },

    /// Render the composed document as JSON
    Json {
        /// Input rows file (JSON array)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Summarize an upload response
    Summary {
        /// Upload response file (JSON object)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Render the upload history
    History {
        /// History file (JSON array)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Render as HTML instead of text
        #[arg(long)]
        html: bool,
    },

    /// Check that a file name is accepted by the upload flow
    Check {
        /// File name to check
        #[arg(value_name = "NAME")]
        name: String,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Html {
            input,
            output,
            no_styles,
            no_lazy,
            strict,
        } => {
            let rows = load_rows(&input)?;
            let mut builder = Rowpress::new()
                .with_styles(!no_styles)
                .with_lazy_images(!no_lazy);
            if strict {
                builder = builder.strict();
            }
            let html = builder.compose(&rows)?.to_html()?;
            write_output(output.as_deref(), &html)
        }

        Commands::Text {
            input,
            output,
            strict,
        } => {
            let rows = load_rows(&input)?;
            let mut builder = Rowpress::new();
            if strict {
                builder = builder.strict();
            }
            let text = builder.compose(&rows)?.to_text()?;
            write_output(output.as_deref(), &text)
        }

        Commands::Json {
            input,
            output,
            compact,
        } => {
            let rows = load_rows(&input)?;
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let json = Rowpress::new().compose(&rows)?.to_json(format)?;
            write_output(output.as_deref(), &json)
        }

        Commands::Summary { input } => {
            let json = fs::read_to_string(&input)?;
            let summary = rowpress::summarize_upload(&json)?;

            println!(
                "{} #{}",
                "Record".green().bold(),
                summary.record_id
            );
            println!("Elements processed: {}", summary.elements_processed);
            for line in &summary.lines {
                println!("  {}: {}", line.label, line.count);
            }
            if !summary.is_consistent() {
                eprintln!(
                    "{}: type counts do not add up to the processed total",
                    "Warning".yellow().bold()
                );
            }
            Ok(())
        }

        Commands::History { input, html } => {
            let json = fs::read_to_string(&input)?;
            let history: History = serde_json::from_str(&json)
                .map_err(|e| rowpress::Error::InvalidRows(e.to_string()))?;
            let rendered = if html {
                render::history::to_html(&history)?
            } else {
                render::history::to_text(&history)?
            };
            println!("{}", rendered);
            Ok(())
        }

        Commands::Check { name } => {
            if rowpress::is_supported_file(&name) {
                println!("{} {}", name, "supported".green());
                Ok(())
            } else {
                eprintln!(
                    "{} {} (expected one of: csv, xlsx, xls)",
                    name,
                    "not supported".red()
                );
                std::process::exit(1);
            }
        }
    }
}

fn load_rows(input: &Path) -> Result<Vec<rowpress::ContentRow>> {
    let json = fs::read_to_string(input)?;
    let rows = rows_from_json(&json)?;
    log::debug!("loaded {} rows from {}", rows.len(), input.display());
    Ok(rows)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
