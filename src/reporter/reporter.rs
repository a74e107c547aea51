use std::io::Write;

use crate::{
    counter::counter::FrequencyMap,
    errors::errors::{Error, ErrorImpl},
    Position,
};

pub fn render(counts: &FrequencyMap) -> Vec<String> {
    counts
        .sorted()
        .into_iter()
        .map(|(word, count)| format!("{}: {}", word, count))
        .collect()
}

/// Writes the report to `out` and returns how many lines were written.
pub fn report<W: Write>(counts: &FrequencyMap, out: &mut W) -> Result<usize, Error> {
    let lines = render(counts);

    for line in &lines {
        writeln!(out, "{}", line).map_err(output_error)?;
    }
    out.flush().map_err(output_error)?;

    Ok(lines.len())
}

fn output_error(err: std::io::Error) -> Error {
    Error::new(
        ErrorImpl::OutputError {
            reason: err.to_string(),
        },
        Position::stdout(),
    )
}
