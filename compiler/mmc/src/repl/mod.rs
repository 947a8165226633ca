//! Interactive read-evaluate-print loop.
//!
//! Reads one expression per line. Errors are printed and the loop goes on;
//! only an exit keyword or end of input stops it.

use crate::render::{render_error, EXAMPLE_INPUT, USAGE_HINT};
use mm_eval::calculate;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Words that end the session, compared case-insensitively.
pub const EXIT_KEYWORDS: &[&str] = &["выход", "exit", "quit"];

const PROMPT: &str = "> ";

/// REPL options.
#[derive(Clone, Debug, Default)]
pub struct ReplConfig {
    /// Skip the banner and instructions.
    pub quiet: bool,
}

/// What happened during one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplSummary {
    pub evaluated: usize,
    pub failed: usize,
}

/// Check whether a line asks to leave the session.
pub fn is_exit_keyword(input: &str) -> bool {
    let lowered = input.trim().to_lowercase();
    EXIT_KEYWORDS.contains(&lowered.as_str())
}

/// Print the banner and usage instructions.
pub fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Min/Max Expression Calculator")?;
    writeln!(out)?;
    writeln!(out, "Usage:")?;
    writeln!(out, "  m(a, b)    minimum of a and b")?;
    writeln!(out, "  M(a, b)    maximum of a and b")?;
    writeln!(out)?;
    writeln!(out, "Examples:")?;
    writeln!(out, "  m(5,10)             -> 5")?;
    writeln!(out, "  M(15,m(16,8))       -> 15")?;
    writeln!(out, "  m(M(2,5),M(3,8))    -> 5")?;
    writeln!(out)?;
    writeln!(out, "Type 'exit', 'quit' or 'выход' to leave.")
}

/// Run the loop until an exit keyword or end of input.
///
/// Results go to `out`. The only errors returned are I/O errors on the
/// streams themselves; evaluation failures are reported and skipped.
pub fn run_repl<R, W>(mut input: R, out: &mut W, config: &ReplConfig) -> io::Result<ReplSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = ReplSummary::default();

    if !config.quiet {
        print_banner(out)?;
    }

    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let expression = line.trim();
        if is_exit_keyword(expression) {
            writeln!(out, "Goodbye!")?;
            break;
        }
        if expression.is_empty() {
            writeln!(out, "warning: empty input, try again")?;
            continue;
        }

        summary.evaluated += 1;
        match calculate(expression) {
            Ok(value) => writeln!(out, "= {value}")?,
            Err(error) => {
                summary.failed += 1;
                debug!(code = %error.code(), "evaluation failed");
                writeln!(out, "{}", render_error(expression, &error))?;
                writeln!(out, "{USAGE_HINT}")?;
                writeln!(out, "example: {EXAMPLE_INPUT}")?;
            }
        }
    }

    Ok(summary)
}
