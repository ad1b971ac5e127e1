use anyhow::{Context, Result};
use mdmanager_engine::MessageHandler;
use std::io::{BufRead, Write};

/// Answers one JSON request per input line with one JSON response per
/// output line until the input closes. Returns the number of requests served.
pub fn serve<R: BufRead, W: Write>(
    handler: &mut MessageHandler,
    input: R,
    mut output: W,
) -> Result<usize> {
    let mut served = 0;

    for line in input.lines() {
        let line = line.context("Failed to read request")?;
        let request = line.trim();
        if request.is_empty() {
            continue;
        }

        let response = handler.handle_json(request)?;
        writeln!(output, "{response}")?;
        output.flush()?;
        served += 1;
    }

    log::info!("Input closed after {served} requests");
    Ok(served)
}
