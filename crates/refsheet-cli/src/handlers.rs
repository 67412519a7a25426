//! Handler functions for the `single` and `batch` subcommands.

use refsheet_content::{parse_file, parse_files, ParseOptions};
use refsheet_core::{id_from_path, Error, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

// ============================================================================
// single
// ============================================================================

/// Parse one file and write its JSON document.
///
/// Writes to `output` when given, stdout otherwise. An unreadable input
/// is fatal for this invocation.
pub async fn handle_single(
    file: &Path,
    output: Option<&Path>,
    options: &ParseOptions,
    indent: usize,
) -> Result<()> {
    let document = parse_file(file, options).await?;
    let json = document.to_json(indent)?;

    match output {
        Some(path) => {
            write_json(path, &json)?;
            println!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

// ============================================================================
// batch
// ============================================================================

/// Parse every file matching `pattern`, one JSON output per input.
///
/// Outputs land in `output_dir` as `<normalized-stem>.json`. Per-file
/// parse failures are reported and skipped; the command fails only when
/// nothing matched, nothing succeeded, or an output write failed.
pub async fn handle_batch(
    pattern: &str,
    output_dir: &Path,
    options: &ParseOptions,
    indent: usize,
) -> Result<()> {
    let paths = resolve_pattern(pattern)?;
    if paths.is_empty() {
        return Err(Error::not_found(format!(
            "No files match pattern '{pattern}'"
        )));
    }

    std::fs::create_dir_all(output_dir).map_err(|e| Error::io_at(output_dir, e))?;

    let outcomes = parse_files(&paths, options).await;
    let mut written: HashSet<String> = HashSet::new();
    let mut failures = 0usize;

    for outcome in &outcomes {
        match &outcome.result {
            Ok(document) => {
                let stem = id_from_path(&outcome.file_path)
                    .unwrap_or_else(|| "cheatsheet".to_string());
                if !written.insert(stem.clone()) {
                    log::warn!("Duplicate output name '{stem}.json'; overwriting earlier result");
                }
                let out_path = output_dir.join(format!("{stem}.json"));
                write_json(&out_path, &document.to_json(indent)?)?;
                println!("Wrote {}", out_path.display());
            }
            Err(e) => {
                failures += 1;
                log::error!("Failed to parse {}: {e}", outcome.file_path.display());
            }
        }
    }

    let total = outcomes.len();
    println!("Parsed {} of {total} files", total - failures);
    if failures == total {
        return Err(Error::parse(format!("All {total} files failed to parse")));
    }
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Expand a glob pattern into the matching regular files.
fn resolve_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern)
        .map_err(|e| Error::parse(format!("Invalid glob pattern '{pattern}': {e}")))?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(_) => {}
            Err(e) => log::warn!("Skipping unreadable glob entry: {e}"),
        }
    }
    Ok(paths)
}

/// Write serialized JSON, creating parent directories as needed.
fn write_json(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io_at(parent, e))?;
        }
    }
    std::fs::write(path, json).map_err(|e| Error::io_at(path, e))
}

// ============================================================================
// Tests
// ============================================================================
