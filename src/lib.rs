//! newszero - Pure-Rust Excel to Word newsletter generator
//!
//! This crate reads a tabular news sheet (XLSX) and renders it as a formatted
//! Word document (DOCX): one page section per supplier, each entry with
//! headline, date, summary, category label, and "Read More" hyperlinks,
//! separated by a horizontal divider rule.
//!
//! The whole transform is a single synchronous pass: parse rows, group them
//! by supplier in first-seen order, assemble the styled document, and
//! serialize it to an in-memory byte buffer owned by the caller.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use newszero::GeneratorBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a generator with default settings
//!     let generator = GeneratorBuilder::new().build()?;
//!
//!     // Open input Excel file
//!     let input = File::open("news.xlsx")?;
//!
//!     // Create output Word file
//!     let output = File::create("newsletter.docx")?;
//!
//!     // Generate the newsletter
//!     generator.generate(input, "Weekly Newsletter", output)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! For in-memory generation, use `Cursor`:
//!
//! ```rust,no_run
//! use std::io::Cursor;
//! use newszero::GeneratorBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = GeneratorBuilder::new().build()?;
//! let excel_data: Vec<u8> = vec![]; // Your Excel file bytes
//! let docx = generator.generate_to_vec(Cursor::new(excel_data), "Weekly Newsletter")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Input Format
//!
//! The news sheet must carry the columns `Supplier`, `Category`, `Date`,
//! `Headline`, and `Summary` (exact names, any order), plus any number of
//! optional columns whose name starts with `Source` holding article URLs.
//! Extra columns such as `S. No` or `Shared` are ignored.
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use newszero::{DateFormat, GeneratorBuilder, SheetSelector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = GeneratorBuilder::new()
//!         .with_sheet_selector(SheetSelector::Name("News".to_string()))  // Named sheet
//!         .with_date_format(DateFormat::Custom("%Y/%m/%d".to_string()))  // Date-typed cells
//!         .with_source_prefix("Link")                                    // Link columns
//!         .build()?;
//!     # let _ = generator;
//!     Ok(())
//! }
//! ```

mod api;
mod builder;
mod docx;
mod error;
mod group;
mod render;
mod security;
mod sheet;
mod types;

// 公開API
pub use api::{DateFormat, SheetSelector};
pub use builder::{Generator, GeneratorBuilder};
pub use error::XlsxToDocxError;
