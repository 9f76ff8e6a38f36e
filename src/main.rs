//! The `pascal-lexer` command.
//!
//! Tokenizes a Pascal program and prints the token table.
//!
//! Options:
//! - `--reserved-words` - File with one reserved word per line (defaults to the built-in list)
//! - `--regex` - Use the regex pattern-table tokenizer instead of the state machine

use std::{fs::read_to_string, path::PathBuf, process, time::Instant};

use anyhow::Context;
use clap::Parser;
use log::{debug, error, info};

use pascal_lexer::{
    display_error,
    lexer::{lexer::tokenize, regex_lexer::tokenize_regex, reserved::ReservedWords, tokens::Token},
};

const TABLE_WIDTH: usize = 55;

#[derive(Parser)]
#[command(name = "pascal-lexer", version, about = "Lexical analyser for Pascal programs")]
struct Cli {
    /// Path to the Pascal program to tokenize
    program: PathBuf,

    /// File with one reserved word per line
    #[arg(short, long = "reserved-words")]
    reserved_words: Option<PathBuf>,

    /// Tokenize with the regex pattern table instead of the state machine
    #[arg(long)]
    regex: bool,
}

fn main() -> anyhow::Result<()> {
    // Default filter is "warn" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let source = read_to_string(&cli.program)
        .with_context(|| format!("Failed to read program {}", cli.program.display()))?;

    let loaded;
    let reserved = match &cli.reserved_words {
        Some(path) => {
            loaded = ReservedWords::from_file(path)
                .with_context(|| format!("Failed to read reserved words from {}", path.display()))?;
            &loaded
        }
        None => {
            debug!("using the built-in reserved words");
            ReservedWords::pascal()
        }
    };

    let start = Instant::now();

    let tokens = if cli.regex {
        tokenize_regex(&source, reserved)
    } else {
        tokenize(&source, reserved)
    };

    let tokens = match tokens {
        Ok(tokens) => tokens,
        Err(err) => {
            error!("lexical error in {}: {}", cli.program.display(), err);
            display_error(&err, &cli.program, &source);
            process::exit(1);
        }
    };

    info!("Tokenized in {:?}", start.elapsed());

    print_table(&tokens);

    Ok(())
}

fn print_table(tokens: &[Token]) {
    println!("{}", "-".repeat(TABLE_WIDTH));
    println!("{:<20}{:<30}{:<5}", "Token", "Classification", "Line");
    println!("{}", "-".repeat(TABLE_WIDTH));

    for token in tokens {
        println!("{}", token);
    }

    println!("{}", "-".repeat(TABLE_WIDTH));
}
