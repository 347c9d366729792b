//! Export command implementation.

use super::write_outputs;
use crate::cli::ExportArgs;
use crate::error::Result;
use crate::output::Formatter;
use depo_extractor::parse_response;
use std::fs;

/// Execute the export command.
///
/// The saved file is held to the same schema as a live service reply. With no
/// export flags the result is just displayed.
pub fn execute_export(args: ExportArgs, formatter: &Formatter) -> Result<()> {
    let text = fs::read_to_string(&args.input)?;
    let result = parse_response(&text)?;

    let output = &args.output;
    if !output.json && !output.csv && !output.copy {
        println!("{}", formatter.format_result(&result)?);
        return Ok(());
    }

    write_outputs(&result, output, formatter)?;
    Ok(())
}
