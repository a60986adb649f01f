//! docxtext CLI - Word document text extraction tool

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use docxtext::{parse_file, render, Extractor, JsonFormat, DEFAULT_CELL_DELIMITER};

/// Characters shown in the post-extraction preview.
const DEFAULT_PREVIEW_CHARS: usize = 500;

#[derive(Parser)]
#[command(name = "docxtext")]
#[command(version)]
#[command(about = "Extract paragraph and table text from Word documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract document text into a plain text file
    Extract {
        /// Input Word document
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output text file (overwritten if it exists)
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Text placed between table cells
        #[arg(long, default_value = DEFAULT_CELL_DELIMITER)]
        delimiter: String,

        /// Number of characters to preview after extraction
        #[arg(long, value_name = "CHARS", default_value_t = DEFAULT_PREVIEW_CHARS)]
        preview: usize,

        /// Do not print a preview
        #[arg(long)]
        no_preview: bool,
    },

    /// Show document structure counts
    Info {
        /// Input Word document
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Dump the parsed document as JSON
    Json {
        /// Input Word document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input,
            output,
            delimiter,
            preview,
            no_preview,
        } => cmd_extract(&input, &output, delimiter, (!no_preview).then_some(preview)),
        Commands::Info { input } => cmd_info(&input),
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(&input, output.as_deref(), compact),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_extract(
    input: &Path,
    output: &Path,
    delimiter: String,
    preview: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = Extractor::new()
        .with_cell_delimiter(delimiter)
        .extract_to_file(input, output)?;

    log::info!(
        "extracted {} lines from {}",
        content.line_count(),
        input.display()
    );
    println!(
        "{} {}",
        "Content extracted and saved to".green(),
        output.display()
    );

    if let Some(max_chars) = preview {
        let rule = "=".repeat(50);
        println!();
        println!("{}", "Document Content Preview:".cyan().bold());
        println!("{}", rule.dimmed());
        println!("{}", content.preview(max_chars));
        println!("{}", rule.dimmed());
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let stats = doc.stats();
    let text = Extractor::new().render(&doc).to_text();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Paragraphs".bold(), stats.paragraphs);
    println!("{}: {}", "Tables".bold(), stats.tables);
    println!("{}: {}", "Table rows".bold(), stats.rows);
    println!("{}: {}", "Table cells".bold(), stats.cells);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Lines".bold(), doc.line_count());
    println!("{}: {}", "Words".bold(), text.split_whitespace().count());
    println!("{}: {}", "Characters".bold(), text.chars().count());

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&doc, format)?;

    if let Some(path) = output {
        docxtext::output::write_atomic(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docxtext".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Word document text extraction tool");
    println!();
    println!("License: MIT");
}
