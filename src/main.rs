use tabjson::convert_file;

use anyhow::{bail, Result};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DELIMITER: char = ';';

#[derive(Debug, PartialEq)]
struct Args {
    source: PathBuf,
    destination: PathBuf,
    delimiter: char,
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let args = parse_args(&args)?;

    convert_file(&args.source, &args.destination, args.delimiter).await?;
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tabjson=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_args(args: &[String]) -> Result<Args> {
    let program = args.first().map_or("tabjson", String::as_str);

    match args.len() {
        3 | 4 => {
            let delimiter = match args.get(3) {
                Some(raw) => parse_delimiter(raw)?,
                None => DEFAULT_DELIMITER,
            };
            Ok(Args {
                source: PathBuf::from(&args[1]),
                destination: PathBuf::from(&args[2]),
                delimiter,
            })
        }
        _ => bail!(
            "Usage: {} <source> <destination> [delimiter]\n  \
             source:      Path to the delimited text file\n  \
             destination: Path of the JSON file to write\n  \
             delimiter:   Single field separator (default: ;)",
            program
        ),
    }
}

fn parse_delimiter(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("Delimiter must be a single character, got '{}'", raw),
    }
}
