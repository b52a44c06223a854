//! CLI Tool Demo
//!
//! This demo shows how to build a command-line tool using newszero
//! for generating newsletter documents from news sheets.

use newszero::{GeneratorBuilder, SheetSelector, XlsxToDocxError};
use std::fs::File;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <input.xlsx> <output-name> [options]", args[0]);
        eprintln!("\nThe output file name gets the .docx extension appended.");
        eprintln!("\nOptions:");
        eprintln!("  --title <text>       Newsletter title (default: output name)");
        eprintln!("  --sheet-index <n>    Select sheet by index (0-based)");
        eprintln!("  --sheet-name <name>  Select sheet by name");
        eprintln!("\nExamples:");
        eprintln!("  {} news.xlsx Newsletter_Final", args[0]);
        eprintln!("  {} news.xlsx weekly --title \"Weekly Newsletter\"", args[0]);
        eprintln!("  {} news.xlsx weekly --sheet-name \"News\"", args[0]);
        process::exit(1);
    }

    let input_path = &args[1];
    let output_name = args[2].trim();
    if output_name.is_empty() {
        eprintln!("Error: output name must not be empty");
        process::exit(1);
    }

    // Parse options
    let mut title = output_name.to_string();
    let mut sheet_selector = SheetSelector::First;
    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--title" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --title requires a value");
                    process::exit(1);
                }
                title = args[i + 1].clone();
                i += 2;
            }
            "--sheet-index" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --sheet-index requires a value");
                    process::exit(1);
                }
                let index = args[i + 1].parse::<usize>().unwrap_or_else(|_| {
                    eprintln!("Error: Invalid sheet index: {}", args[i + 1]);
                    process::exit(1);
                });
                sheet_selector = SheetSelector::Index(index);
                i += 2;
            }
            "--sheet-name" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --sheet-name requires a value");
                    process::exit(1);
                }
                sheet_selector = SheetSelector::Name(args[i + 1].clone());
                i += 2;
            }
            _ => {
                eprintln!("Error: Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
    }

    let output_path = format!("{}.docx", output_name);

    match generate_newsletter(input_path, &output_path, &title, sheet_selector) {
        Ok(_) => {
            println!("Generated: {} -> {}", input_path, output_path);
        }
        Err(e) => {
            handle_error(e);
            process::exit(1);
        }
    }
}

fn generate_newsletter(
    input_path: &str,
    output_path: &str,
    title: &str,
    sheet_selector: SheetSelector,
) -> Result<(), XlsxToDocxError> {
    // Build generator with the selected sheet
    let generator = GeneratorBuilder::new()
        .with_sheet_selector(sheet_selector)
        .build()?;

    // Open input file
    let input = File::open(input_path)?;

    // Write to output file
    let output = File::create(output_path)?;
    generator.generate(input, title, output)?;

    Ok(())
}

fn handle_error(error: XlsxToDocxError) {
    match error {
        XlsxToDocxError::Io(io_err) => {
            eprintln!("I/O Error: {}", io_err);
            eprintln!("Please check that the file exists and you have permission to access it.");
        }
        XlsxToDocxError::Parse(parse_err) => {
            eprintln!("Parse Error: {}", parse_err);
            eprintln!("The file may not be a valid Excel file or may be corrupted.");
        }
        XlsxToDocxError::MissingColumn { column } => {
            eprintln!("Missing Column: {}", column);
            eprintln!("The news sheet must contain the columns Supplier, Category, Date, Headline and Summary.");
        }
        XlsxToDocxError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
            eprintln!("Please check your sheet selection or date format.");
        }
        XlsxToDocxError::Xml(xml_err) => {
            eprintln!("XML Write Error: {}", xml_err);
        }
        XlsxToDocxError::Zip(msg) => {
            eprintln!("ZIP Archive Error: {}", msg);
        }
        XlsxToDocxError::SecurityViolation(msg) => {
            eprintln!("Security Violation: {}", msg);
            eprintln!("The file violates security constraints (e.g., file size limit).");
        }
    }
}
