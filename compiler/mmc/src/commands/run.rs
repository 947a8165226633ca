//! The `run` command: evaluate every line of a file.

use crate::render::render_error;
use mm_eval::calculate_all;
use std::io::{self, Write};
use std::path::Path;

/// Evaluate each non-blank line of `path` independently.
///
/// Lines are evaluated in parallel and reported in file order. Returns
/// `false` if the file cannot be read or any line fails.
pub fn run_file(path: &Path, out: &mut impl Write, err: &mut impl Write) -> io::Result<bool> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            writeln!(err, "error: failed to read '{}': {e}", path.display())?;
            return Ok(false);
        }
    };

    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();
    let expressions: Vec<&str> = lines.iter().map(|(_, line)| *line).collect();
    let results = calculate_all(&expressions);

    let mut all_ok = true;
    for ((number, line), result) in lines.iter().zip(results) {
        match result {
            Ok(value) => writeln!(out, "line {number}: {value}")?,
            Err(error) => {
                all_ok = false;
                writeln!(out, "line {number}: {}", render_error(line, &error))?;
            }
        }
    }
    Ok(all_ok)
}
