//! Infix calculator CLI.
//!
//! Prompts for one expression on stdin and prints either `Result: N` or
//! `Error: <message>`. Errors are reported, not propagated: the exit code
//! is 0 either way.

use std::io::{self, BufRead, Write};

fn main() {
    ifxc::init_tracing();

    print!("Enter an infix expression: ");
    if io::stdout().flush().is_err() {
        return;
    }

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        // EOF before any input: nothing to calculate.
        Ok(0) => {}
        Ok(_) => match ifxc::calculate(&line) {
            Ok(result) => println!("Result: {result}"),
            Err(err) => println!("Error: {err}"),
        },
        Err(err) => println!("Error: {err}"),
    }
}
