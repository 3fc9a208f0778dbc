//! drawable2svg CLI
//!
//! Usage:
//!   drawable2svg [OPTIONS] <XML_FILE>...
//!
//! Options:
//!   -c, --colors-xml <FILE>  A colors.xml resource file (repeatable)
//!   -o, --output-dir <DIR>   Write converted files into this directory
//!       --viewbox-only       Emit only the viewBox, without width/height

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use drawable2svg::{convert_file, ColorTable, ConvertOptions, Diagnostics};

#[derive(Parser)]
#[command(name = "drawable2svg")]
#[command(about = "Convert vector drawable XML files to SVG")]
struct Cli {
    /// Vector drawable files to convert
    #[arg(required = true, value_name = "XML_FILE")]
    inputs: Vec<PathBuf>,

    /// A colors.xml resource file; repeatable, later files override earlier ones
    #[arg(short, long = "colors-xml", value_name = "FILE")]
    colors_xml: Vec<PathBuf>,

    /// Write converted files into this directory instead of alongside the input
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Emit only the viewBox attribute, without explicit width and height
    #[arg(long)]
    viewbox_only: bool,
}

fn main() {
    let cli = Cli::parse();

    // The color table is parsed once and shared across the whole batch.
    let mut diagnostics = Diagnostics::new();
    let mut colors = ColorTable::new();
    for path in &cli.colors_xml {
        let xml = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading colors file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        };
        if let Err(e) = colors.merge_resources(&xml, &mut diagnostics) {
            eprintln!("Error parsing colors file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }
    print_warnings(&diagnostics);

    let mut options = ConvertOptions::new().with_viewbox_only(cli.viewbox_only);
    if let Some(dir) = cli.output_dir {
        options = options.with_output_dir(dir);
    }

    // One failing document is reported and does not stop the batch.
    let mut failed = 0usize;
    for input in &cli.inputs {
        println!("Converting {}", input.display());
        let mut diagnostics = Diagnostics::new();
        match convert_file(input, &colors, &options, &mut diagnostics) {
            Ok(_) => print_warnings(&diagnostics),
            Err(e) => {
                eprintln!("Failed to convert {}: {}", input.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
}

fn print_warnings(diagnostics: &Diagnostics) {
    for warning in diagnostics.warnings() {
        eprintln!("warning: {warning}");
    }
}
