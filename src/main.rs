//! Kaleidoscope front-end CLI entry point

use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use kaleidoscope::{
    display_error,
    lexer::lexer::tokenize,
    parse_translation_unit,
    parser::options::{ANON_EXPR_NAME, DEFAULT_MAX_NESTING_DEPTH, DEFAULT_UNIT_NAME},
    ParseOptions,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const SAMPLE_NAME: &str = "sample.k";
const DEFAULT_LOG_FILTER: &str = "off";
const SAMPLE_SOURCE: &str = include_str!("../demos/sample.k");

/// Parses Kaleidoscope source and prints its syntax tree
#[derive(Parser, Debug)]
#[command(name = "kaleidoscope")]
#[command(version)]
#[command(about = "Parses Kaleidoscope source and prints its syntax tree", long_about = None)]
struct Cli {
    /// Source file to parse (the bundled sample program when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Name of the translation unit
    #[arg(long = "unit-name", value_name = "NAME", default_value = DEFAULT_UNIT_NAME)]
    unit_name: String,

    /// Name given to functions wrapping top-level statements
    #[arg(long = "anon-name", value_name = "NAME", default_value = ANON_EXPR_NAME)]
    anon_name: String,

    /// Deepest nesting of expressions and blocks accepted
    #[arg(long = "max-depth", value_name = "DEPTH", default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    max_depth: usize,

    /// Print the token stream instead of the tree
    #[arg(long)]
    tokens: bool,
}

fn main() -> ExitCode {
    // Failures are printed once as a caret view below; log output is opt-in through RUST_LOG
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .try_init();

    let cli = Cli::parse();

    let (source, file_name) = match &cli.file {
        Some(path) => match read_to_string(path) {
            Ok(source) => {
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                (source, file_name)
            }
            Err(err) => {
                eprintln!("Failed to read {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        None => (String::from(SAMPLE_SOURCE), String::from(SAMPLE_NAME)),
    };

    let start = Instant::now();

    if cli.tokens {
        return match tokenize(&source, Some(file_name)) {
            Ok(tokens) => {
                debug!(count = tokens.len(), elapsed = ?start.elapsed(), "tokenized");
                for token in tokens {
                    println!("{}", token);
                }
                ExitCode::SUCCESS
            }
            Err(error) => {
                eprintln!("{}", display_error(&error, &source));
                ExitCode::FAILURE
            }
        };
    }

    let options = ParseOptions::default()
        .with_file_name(file_name)
        .with_unit_name(cli.unit_name)
        .with_anonymous_name(cli.anon_name)
        .with_max_nesting_depth(cli.max_depth);

    match parse_translation_unit(&source, &options) {
        Ok(unit) => {
            info!(elapsed = ?start.elapsed(), "parsed");
            for line in unit.dump() {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", display_error(&error, &source));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::{EnvFilter, Layer, Registry};

    use super::DEFAULT_LOG_FILTER;

    #[test]
    fn test_default_filter_leaves_failures_to_caret_view() {
        let filter = EnvFilter::new(DEFAULT_LOG_FILTER);
        let hint = <EnvFilter as Layer<Registry>>::max_level_hint(&filter);

        assert_eq!(hint, Some(LevelFilter::OFF));
    }
}
