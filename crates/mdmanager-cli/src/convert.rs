use anyhow::{Context, Result};
use mdmanager_engine::{Converter, io};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Outcome of converting a directory tree.
#[derive(Debug, Default)]
pub struct DirectoryReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Converts everything readable from `input` and writes the HTML to `output`.
pub fn convert_stream<R: Read, W: Write>(
    converter: &Converter,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut markdown = String::new();
    input
        .read_to_string(&mut markdown)
        .context("Failed to read markdown from stdin")?;

    let html = converter.convert(&markdown)?;
    writeln!(output, "{html}")?;
    output.flush()?;
    Ok(())
}

/// Converts one file. Without a target the HTML goes to `stdout`.
pub fn convert_file<W: Write>(
    converter: &Converter,
    input: &Path,
    target: Option<&Path>,
    stdout: W,
) -> Result<()> {
    let markdown = io::read_file(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    match target {
        Some(target) => {
            let html = converter
                .convert(&markdown)
                .with_context(|| format!("Failed to convert {}", input.display()))?;
            io::write_file(target, &html)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            log::info!("Wrote {}", target.display());
            Ok(())
        }
        None => convert_stream(converter, markdown.as_bytes(), stdout),
    }
}

/// Converts every markdown file under `root`.
///
/// Each file lands next to its source as `.html`, or under `out_dir` with
/// the same relative layout. Files rejected by the converter are skipped
/// and reported; filesystem errors abort the run.
pub fn convert_directory(
    converter: &Converter,
    root: &Path,
    out_dir: Option<&Path>,
) -> Result<DirectoryReport> {
    let files = io::scan_markdown_files(root)?;
    log::info!("Found {} markdown files in {}", files.len(), root.display());

    let mut report = DirectoryReport::default();
    for file in files {
        let markdown =
            io::read_file(&file).with_context(|| format!("Failed to read {}", file.display()))?;

        let html = match converter.convert(&markdown) {
            Ok(html) => html,
            Err(e) => {
                log::warn!("Skipping {}: {e}", file.display());
                report.skipped.push(file);
                continue;
            }
        };

        let target = target_for(root, &file, out_dir);
        io::write_file(&target, &html)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        log::debug!("Wrote {}", target.display());
        report.written.push(target);
    }

    Ok(report)
}

fn target_for(root: &Path, file: &Path, out_dir: Option<&Path>) -> PathBuf {
    match (out_dir, file.strip_prefix(root)) {
        (Some(out_dir), Ok(relative)) => io::html_path_for(&out_dir.join(relative)),
        _ => io::html_path_for(file),
    }
}
