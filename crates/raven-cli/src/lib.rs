//! CLI logic for the Raven matrix tool.
//!
//! This module contains the core CLI logic: a figure document is read,
//! its transformation is applied across one matrix row and the resulting
//! figures are written back out as TOML.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info};

use raven::{RavenError, RowBuilder};

/// Run the Raven CLI application
///
/// This function processes the input document through the Raven pipeline
/// and writes the generated row to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `RavenError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Document parsing errors
/// - Unknown routine or decorator names
/// - Transformation errors
/// - Drawing errors, when tracing
pub fn run(args: &Args) -> Result<(), RavenError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing figure document"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let length = args.steps.unwrap_or(app_config.matrix().size());

    let source = fs::read_to_string(&args.input)?;

    let builder = RowBuilder::new(app_config);
    let document = builder.parse(&source)?;
    let (figure, transformation) = builder.build(&document)?;
    let row = builder.row(&figure, &transformation, length)?;

    if args.trace {
        for trace in builder.trace(0, &row)? {
            println!("{} ({} calls)", trace.cell().id(), trace.commands().len());
            for command in trace.commands() {
                println!("  {command:?}");
            }
        }
    }

    let output = builder.to_toml(&row)?;
    fs::write(&args.output, output)?;
    debug!(figures = row.len(); "Row written");

    info!(output_file = args.output; "Row exported successfully");

    Ok(())
}
