use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use lox_front::parser::stream::{self, DEFAULT_CAPACITY};
use lox_front::{FrontendError, Lexer, StreamConfig, Token};

#[derive(Parser)]
#[command(name = "lox-front")]
#[command(about = "Tokenizes and parses Lox expressions", version)]
struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run the lexer on its own thread behind a bounded token channel
    #[arg(long, global = true)]
    concurrent: bool,

    /// Token channel capacity for --concurrent
    #[arg(long, global = true, default_value_t = DEFAULT_CAPACITY)]
    buffer: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every token of the file, one per line
    Tokenize {
        /// Source file
        input: PathBuf,
    },

    /// Parse the file and print the AST in prefix form
    Parse {
        /// Source file
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // lexical errors were already reported token by token
            if !matches!(error, FrontendError::Lexical { .. }) {
                eprintln!("{error}");
            }
            ExitCode::from(error.exit_code())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), FrontendError> {
    match &cli.command {
        Commands::Tokenize { input } => {
            let source = fs::read_to_string(input)?;
            info!(file = %input.display(), bytes = source.len(), "tokenizing");

            let mut errors = 0;
            for token in token_source(cli, &source)? {
                match &token.error {
                    Some(error) => {
                        eprintln!("{error}");
                        errors += 1;
                    }
                    None => println!("{token}"),
                }
            }

            if errors > 0 {
                debug!(errors, "tokenize finished with lexical errors");
                return Err(FrontendError::Lexical { count: errors });
            }
        }
        Commands::Parse { input } => {
            let source = fs::read_to_string(input)?;
            info!(file = %input.display(), bytes = source.len(), "parsing");

            let tokens = token_source(cli, &source)?;
            let program = lox_front::Parser::new(tokens).parse()?;
            if !program.is_empty() {
                println!("{program}");
            }
        }
    }

    Ok(())
}

/// Pull-based lexer by default, producer thread with `--concurrent`.
fn token_source<'a>(
    cli: &Cli,
    source: &'a str,
) -> Result<Box<dyn Iterator<Item = Token> + 'a>, FrontendError> {
    if cli.concurrent {
        let config = StreamConfig::with_capacity(cli.buffer);
        Ok(Box::new(stream::spawn(source.to_owned(), config)?))
    } else {
        Ok(Box::new(Lexer::new(source)))
    }
}
