use bluprints_core::gateways::prompt::Prompt;
use std::io::{self, BufRead, Write};

/// Reads answers from standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Prompt for Console {
    fn read_line(&self, message: &str) -> io::Result<String> {
        {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{message}")?;
            stdout.flush()?;
        }
        read_answer(&mut io::stdin().lock())
    }
}

fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "console input closed",
        ));
    }
    let answer = line.trim_end_matches(['\r', '\n']);
    Ok(answer.to_string())
}
