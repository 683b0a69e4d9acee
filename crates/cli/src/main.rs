use clap::Parser as ClapParser;
use colored::*;
use std::{
    fs,
    io::{self, Write},
    process,
};

use frontend::lexer::Lexer;
use frontend::parser::Parser;
use runtime::{environment::Environment, interpreter::Interpreter};
use tools::errors::render_error_report;

// --------
//   CLI
// --------

#[derive(ClapParser)]
#[command(version)]
#[command(about = "Interpreter for the Quill language")]
struct Cli {
    /// Path to the file to interpret
    #[arg(short, long)]
    file: Option<String>,

    /// Interactive mode after interpreting a file
    #[arg(short, long)]
    inter: bool,

    /// Prints the parsed program in canonical form
    #[arg(short, long)]
    ast_print: bool,
}

fn open_file(file_path: &str) -> String {
    match fs::read_to_string(file_path) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error opening script file {file_path}: {e}");
            process::exit(1);
        }
    }
}

fn interpret_file(file_name: &str, env: &mut Environment, cli: &Cli) {
    println!("\nReading source file {}...", file_name.green());
    let source_code = open_file(file_name);

    interpretation_sequence(&source_code, env, cli);
}

fn interpretation_sequence(code: &str, env: &mut Environment, cli: &Cli) {
    // An empty statement sequence is not a valid evaluator input
    if code.trim().is_empty() {
        return;
    }

    let mut parser = Parser::new(Lexer::new(code));
    let program = parser.parse();

    if cli.ast_print {
        println!("\nParsed program:\n{program}");
    }

    // A non-empty error list means the AST is incomplete, so evaluation
    // is skipped
    if !parser.errors.is_empty() {
        let header = format!("{} produced the following errors:", "Parser".red().bold());
        println!("{}", render_error_report(&header, &parser.errors));
        return;
    }

    let interpreter = Interpreter {};

    match interpreter.execute_program(program, env) {
        Ok(value) => println!("{value}"),
        Err(e) => println!("{}: {e}", "Evaluation error".red().bold()),
    }
}

// REPL. The environment persists across inputs so bindings from earlier
// lines stay visible.
fn repl(env: &mut Environment, cli: &Cli) {
    println!("\n{} mode started", "Interactive".yellow().bold());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut input = String::new();

    loop {
        input.clear();
        print!("\n> ");
        stdout.flush().unwrap();

        match stdin.read_line(&mut input) {
            Ok(_) => {
                let trimmed_input = input.trim();

                if trimmed_input == "quit" {
                    process::exit(0);
                }

                interpretation_sequence(trimmed_input, env, cli);
            }
            Err(e) => {
                eprintln!("Error reading from terminal: {e}");
                process::exit(1);
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();

    println!("\n       --- {} language v0.1 ---", "Quill".cyan().bold());
    io::stdout().flush().unwrap();

    let mut env = Environment::new();

    if let Some(file_name) = cli.file.as_ref() {
        interpret_file(file_name, &mut env, &cli);

        // Interactive mode keeps the file's environment
        if cli.inter {
            repl(&mut env, &cli);
        }
    } else {
        repl(&mut env, &cli);
    }
}
