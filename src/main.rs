mod cli;

use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::Path,
    process::ExitCode,
    time::Instant,
};

use clap::Parser as _;
use colored::Colorize;
use log::{debug, info};

use cli::{Cli, Commands};
use frontend::{
    ast::ast::{Node, Program},
    errors::errors::{Error, ErrorTip},
    evaluator::{environment::Environment, evaluator::eval_program, value::Value},
    get_line_at_position,
    lexer::lexer::tokenize,
    parser::parser::{parse_with_config, ParserConfig},
};

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let config = ParserConfig {
        strict_blocks: cli.strict_blocks,
    };

    let succeeded = match cli.command {
        Commands::Tokens(args) => print_tokens(&args.file),
        Commands::Parse(args) => print_program(&args.file, config),
        Commands::Run(args) => run_file(&args.file, config),
        Commands::Repl => repl(config),
    };

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn read_source(file_path: &str) -> Option<(String, String)> {
    let file_name = Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string());

    match read_to_string(file_path) {
        Ok(contents) => Some((file_name, contents)),
        Err(error) => {
            eprintln!("{}: could not read {}: {}", "Error".red().bold(), file_path, error);
            None
        }
    }
}

fn print_tokens(file_path: &str) -> bool {
    let Some((file_name, contents)) = read_source(file_path) else {
        return false;
    };

    for token in tokenize(contents, Some(file_name)) {
        println!("{}", token.debug());
    }

    true
}

/// Parses a file, printing every diagnostic on failure.
fn parse_file(file_path: &str, config: ParserConfig) -> Option<(String, Program)> {
    let (file_name, contents) = read_source(file_path)?;

    let start = Instant::now();
    let (parser, program) = parse_with_config(tokenize(contents.as_str(), Some(file_name)), config);
    info!("Parsed in {:?}", start.elapsed());

    if !parser.diagnostics().is_empty() {
        for error in parser.diagnostics() {
            display_error(error, &contents);
        }
        return None;
    }

    Some((contents, program))
}

fn print_program(file_path: &str, config: ParserConfig) -> bool {
    let Some((_, program)) = parse_file(file_path, config) else {
        return false;
    };

    println!("{}", program.canonical_form());
    true
}

fn run_file(file_path: &str, config: ParserConfig) -> bool {
    let Some((contents, program)) = parse_file(file_path, config) else {
        return false;
    };

    let start = Instant::now();
    let result = eval_program(&program, &Environment::new());
    info!("Evaluated in {:?}", start.elapsed());

    match result {
        Ok(Value::Null) => true,
        Ok(value) => {
            println!("{}", value);
            true
        }
        Err(error) => {
            display_error(&error, &contents);
            false
        }
    }
}

fn repl(config: ParserConfig) -> bool {
    let env = Environment::new();
    let stdin = io::stdin();

    loop {
        print!(">> ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return true,
            Ok(_) => {}
            Err(error) => {
                eprintln!("{}: {}", "Error".red().bold(), error);
                return false;
            }
        }

        let (parser, program) = parse_with_config(tokenize(line.as_str(), None), config);
        debug!("repl line parsed as {}", program);

        if !parser.diagnostics().is_empty() {
            for error in parser.diagnostics() {
                display_error(error, &line);
            }
            continue;
        }

        match eval_program(&program, &env) {
            Ok(Value::Null) => {}
            Ok(value) => println!("{}", value),
            Err(error) => display_error(&error, &line),
        }
    }
}

fn display_error(error: &Error, contents: &str) {
    /*
        error: message
        -> final.lang:20
           |
        20 | let a = #;
           | --------^
    */

    let position = error.get_position();

    match error.get_tip() {
        ErrorTip::None => eprintln!("{}: {}", "Error".red().bold(), error),
        tip => eprintln!("{}: {} ({})", "Error".red().bold(), error, tip),
    }

    let Some((line, line_text, line_pos)) = get_line_at_position(contents, position.0) else {
        eprintln!("{} {}", "->".blue().bold(), position.1);
        return;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    eprintln!("{} {}:{}", "->".blue().bold(), position.1, line);
    eprintln!("{:>padding$}", "|".blue());

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} {} {}", line_str.blue().bold(), "|".blue(), line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    eprintln!("{:>padding$} {}", "|".blue(), format!("{:->arrows$}", "^").red().bold());
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches(|c: char| c == ' ' || c == '\t');

    (trimmed, string.len() - trimmed.len())
}
