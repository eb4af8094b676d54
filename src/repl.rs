use std::io::{self, BufRead, Write};

use crate::evaluate;

/// Text printed before each line of input.
pub const PROMPT: &str = "Enter an expression (or 'exit'): ";

/// Runs the read-eval-print loop until `exit` or end of input.
///
/// Each non-blank line is evaluated on its own. A successful evaluation
/// prints `Result: <value>`; a failed one prints `Error: <message>` and the
/// loop carries on with the next line. A line that is not valid UTF-8 is
/// reported the same way. `exit` is matched case-insensitively after
/// trimming.
///
/// # Errors
/// Returns an error only if reading from `input` or writing to `output`
/// fails.
///
/// # Example
/// ```
/// use arithmo::repl::run;
///
/// let mut output = Vec::new();
/// run("1 + 1\n1 / 0\nexit\n".as_bytes(), &mut output).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("Result: 2"));
/// assert!(output.contains("Division by zero"));
/// ```
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let mut line = Vec::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let source = match std::str::from_utf8(&line) {
            Ok(source) => source.trim(),
            Err(e) => {
                writeln!(output, "Error: Input is not valid UTF-8: {e}.")?;
                continue;
            },
        };
        if source.eq_ignore_ascii_case("exit") {
            break;
        }
        if source.is_empty() {
            continue;
        }

        match evaluate(source) {
            Ok(value) => writeln!(output, "Result: {value}")?,
            Err(e) => writeln!(output, "Error: {e}")?,
        }
    }

    writeln!(output, "Goodbye.")
}
