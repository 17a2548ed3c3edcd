use std::fs;
use std::io::{self, BufRead, Write};

use crate::frontend::{error::ParseError, lexer::Lexer, parser::Parser};

const PROMPT: &[u8] = b">> ";

const MONKEY_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

pub fn start<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    write_flush(&mut output, PROMPT)?;
    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            run(&line, "repl", &mut output)?;
        }
        write_flush(&mut output, PROMPT)?;
    }

    Ok(())
}

pub fn read<W: Write>(file: String, mut output: W) -> io::Result<()> {
    let source = fs::read_to_string(&file)?;
    run(&source, &file, &mut output)
}

// Fresh lexer and parser every time; nothing carries over between lines.
fn run<W: Write>(source: &str, filename: &str, output: &mut W) -> io::Result<()> {
    let lexer = Lexer::new(source, filename);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        writeln!(output, "{program}")
    } else {
        print_parser_errors(output, parser.errors())
    }
}

fn print_parser_errors<W: Write>(output: &mut W, errors: &[ParseError]) -> io::Result<()> {
    write!(output, "{MONKEY_FACE}")?;
    writeln!(output, "Woops! We ran into some monkey business here!")?;
    writeln!(output, " parser errors:")?;
    for err in errors {
        writeln!(output, "\t{err}")?;
    }

    Ok(())
}

fn write_flush<W: Write>(output: &mut W, buf: &[u8]) -> io::Result<()> {
    output.write_all(buf)?;
    output.flush()
}
