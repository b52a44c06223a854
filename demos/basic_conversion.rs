//! Basic Conversion Demo
//!
//! This demo shows the simplest way to turn a news sheet into a
//! newsletter document using newszero.

use newszero::GeneratorBuilder;
use std::fs::File;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a generator with default settings
    let generator = GeneratorBuilder::new().build()?;

    // Open input Excel file
    let input = File::open("news.xlsx")?;

    // Create output Word file
    let output = File::create("newsletter.docx")?;

    // Generate the newsletter
    generator.generate(input, "Weekly Newsletter", output)?;

    println!("Generated newsletter.docx from news.xlsx");
    Ok(())
}
