use std::fs;

use argand::evaluate;
use clap::Parser;
use rustyline::{DefaultEditor, Result as ReplResult, error::ReadlineError};

/// argand evaluates expressions over the complex plane.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells argand to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// The expression to evaluate. Starts an interactive session when
    /// omitted.
    expression: Option<String>,
}

fn main() -> ReplResult<()> {
    let args = Args::parse();

    let Some(contents) = args.expression else {
        return run_repl();
    };

    let source = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    match evaluate(source.trim()) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }

    Ok(())
}

fn run_repl() -> ReplResult<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;

                match evaluate(&line) {
                    Ok(result) => println!("{result}"),
                    Err(e) => eprintln!("{e}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {err:?}");
                break;
            },
        }
    }

    Ok(())
}
