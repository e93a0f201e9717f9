use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "frontend")]
#[command(about = "Lexer, Pratt parser and evaluator for a small scripting language")]
pub struct Cli {
    /// Report blocks left open at end of input
    #[arg(long, global = true)]
    pub strict_blocks: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the tokens of a source file
    Tokens(FileArgs),
    /// Parse a source file and print its canonical form
    Parse(FileArgs),
    /// Parse and evaluate a source file
    Run(FileArgs),
    /// Read and evaluate lines interactively
    Repl,
}

#[derive(clap::Args)]
pub struct FileArgs {
    /// Input file path
    pub file: String,
}
