use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
};

use clap::Parser;
use priocalc::{
    evaluate, get_result,
    interpreter::{
        environment::Environment,
        evaluator::function::{BUILTIN_CONSTANTS, BUILTIN_FUNCTIONS},
    },
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// priocalc evaluates arithmetic expressions with variables, built-in
/// functions and constants.
///
/// Without CONTENTS, expressions are read line by line from standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells priocalc to read expressions from a file, one per line, instead
    /// of taking CONTENTS as an expression.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Pipe mode prints only the last value of CONTENTS and stops at the
    /// first error.
    #[arg(short, long, requires = "contents")]
    pipe_mode: bool,

    contents: Option<String>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_writer(io::stderr)
                             .with_env_filter(filter)
                             .init();

    let args = Args::parse();

    let script = match args.contents {
        Some(contents) if args.file => fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not \
                       exist?");
            std::process::exit(1);
        }),
        Some(contents) => contents,
        None => {
            interactive_session();
            return;
        },
    };

    if args.pipe_mode {
        if let Err(e) = get_result(&script, true) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    }

    let mut env = Environment::new();
    for line in script.lines() {
        evaluate_line(line, &mut env);
    }
}

/// Reads expressions from standard input until it is closed.
///
/// `:clear` forgets every variable of the session and `:help` lists the
/// builtins.
fn interactive_session() {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut env = Environment::new();

    loop {
        if prompt {
            print!("> ");
            if io::stdout().flush().is_err() {
                return;
            }
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return,
            Ok(_) => {},
            Err(e) => {
                warn!(error = %e, "failed to read from stdin");
                return;
            },
        }

        match line.trim() {
            ":clear" => {
                info!(variables = env.len(), "clearing environment");
                env.clear();
            },
            ":help" => println!("{}", help_text()),
            _ => evaluate_line(&line, &mut env),
        }
    }
}

/// Lists the operators, builtin functions and constants.
fn help_text() -> String {
    let constants: Vec<&str> = BUILTIN_CONSTANTS.iter().map(|(name, _)| *name).collect();
    format!("operators: + - * / % ^ = ( )\nfunctions: {}\nconstants: {}\ncommands:  :clear :help",
            BUILTIN_FUNCTIONS.join(" "),
            constants.join(" "))
}

/// Evaluates one line and reports its outcome. Blank lines are skipped.
fn evaluate_line(line: &str, env: &mut Environment) {
    let expression = line.trim();
    match evaluate(expression, env) {
        Ok(Some(value)) => println!("{expression} => {value}"),
        Ok(None) => {},
        Err(e) => eprintln!("{expression} => error: {e}"),
    }
}
