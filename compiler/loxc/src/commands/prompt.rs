//! The interactive prompt.

use std::io::{self, BufRead, Write};

use lox_diagnostic::DiagnosticEmitter;

use crate::{exit, Lox};

const PROMPT: &str = "> ";

/// Read lines from stdin and run each one until end of input.
pub fn run_prompt() -> i32 {
    let mut lox = Lox::stdio();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match run_prompt_with(stdin.lock(), &mut stdout, &mut lox) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error reading input: {err}");
            exit::IO_ERR
        }
    }
}

/// Each line is its own unit: errors are reset before the next line, while
/// globals carry over.
pub fn run_prompt_with<R, W, E>(mut input: R, prompt: &mut W, lox: &mut Lox<E>) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: DiagnosticEmitter,
{
    let mut line = String::new();
    loop {
        write!(prompt, "{PROMPT}")?;
        prompt.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(prompt)?;
            return Ok(());
        }
        lox.run(&line);
        lox.reset_errors();
    }
}
