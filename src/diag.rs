use std::fmt::Display;
use std::io::{self, Write};

/// One-line diagnostic with the position the lexer was at when the error fired.
pub fn report<W: Write, E: Display>(
    output: &mut W,
    filename: &str,
    line: usize,
    column: usize,
    err: &E,
) -> io::Result<()> {
    writeln!(output, "file: {filename} line: {line} column: {column}, error: {err}")
}

pub fn print_err<E: Display>(filename: &str, line: usize, column: usize, err: &E) {
    // A diagnostic that cannot reach stdout is not worth failing the caller over.
    let _ = report(&mut io::stdout(), filename, line, column, err);
}
