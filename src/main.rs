use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use satzbau::{Format, write_entries, write_sentences};
use satzbau_synth::{RngSource, SentenceKind, batch_size, generate_many};
use satzbau_vocab::{parse, require_vocabulary};

#[derive(Parser)]
#[command(name = "satzbau")]
#[command(about = "Generate English/German practice sentences from a vocabulary list")]
struct Cli {
    /// Vocabulary file; standard input when omitted.
    #[arg(long, global = true)]
    file: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[arg(long, global = true, value_enum, default_value_t = Format::Csv)]
    format: Format,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the parsed vocabulary entries.
    Parse,
    /// Intransitive sentences (`Sie ist hungrig.`).
    Intrans {
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        number: Option<i64>,
    },
    /// Accusative sentences (`Er sieht den Angriff.`).
    Acc {
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        number: Option<i64>,
    },
    /// Subordinate "dass" sentences.
    Sub {
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        number: Option<i64>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let text = read_input(cli.file.as_deref())?;
    let text = require_vocabulary(&text)?;
    let entries = parse(text);
    info!("{} vocabulary entries", entries.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let (kind, number) = match cli.command {
        Commands::Parse => {
            write_entries(&mut out, &entries, cli.format)?;
            return Ok(out.flush()?);
        }
        Commands::Intrans { number } => (SentenceKind::Intransitive, number),
        Commands::Acc { number } => (SentenceKind::Accusative, number),
        Commands::Sub { number } => (SentenceKind::Subordinate, number),
    };

    let count = batch_size(number);
    debug!("generating {count} {kind} sentences");
    let sentences = match cli.seed {
        Some(seed) => generate_many(kind, &entries, count, &mut RngSource::seeded(seed)),
        None => generate_many(kind, &entries, count, &mut RngSource::thread()),
    };
    write_sentences(&mut out, &sentences, cli.format)?;
    out.flush()?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read vocabulary {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("read vocabulary from stdin")?;
            Ok(text)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
