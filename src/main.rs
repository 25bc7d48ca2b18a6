use std::error::Error as StdError;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use curriculum_pdf::{assembler, data};

/// Renders the 18-month cybersecurity curriculum to a paginated PDF with
/// clickable links.
///
/// Fonts must be present under `assets/fonts` or provided via the
/// `CURRICULUM_PDF_FONTS_DIR` environment variable.
#[derive(Parser)]
#[command(author, version, about = "Generates the cybersecurity curriculum PDF")]
struct Cli {
    /// Output path for the generated document.
    #[arg(long, default_value = assembler::DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    match assembler::generate(&data::standard_curriculum(), &cli.output) {
        Ok(path) => println!("Generated: {}", path.display()),
        Err(err) => {
            eprintln!("Error: {}", err);
            print_error_sources(&err);
            process::exit(1);
        }
    }
}

fn print_error_sources(mut error: &(dyn StdError + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
