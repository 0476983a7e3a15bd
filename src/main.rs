// model = "claude-opus-4-5"
// created = 2026-10-15
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Reads lines from stdin and prints each distinct line once, in order,
//! ignoring case and surrounding whitespace when deciding what "distinct"
//! means. The first spelling seen wins.
//!
//! `RUST_LOG` controls logging (default `info`, to stderr).
//! `TREAPSET_SEED` fixes the priority seed.

use std::io;
use std::io::BufRead;
use std::io::Write;

use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use treapset::ByKey;
use treapset::Options;
use treapset::OrderedSet;

#[derive(Debug, Error)]
enum DemoError {
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("TREAPSET_SEED must be a decimal u64, got {0:?}")]
    Seed(String),
}

fn options_from_env() -> Result<Options, DemoError> {
    let Ok(raw) = std::env::var("TREAPSET_SEED") else {
        return Ok(Options::default());
    };
    let seed = raw.trim().parse().map_err(|_| DemoError::Seed(raw.clone()))?;
    return Ok(Options {
        capacity: 0,
        seed: Some(seed),
    });
}

/// Positions of the distinct lines, in order, and how many lines were
/// dropped as repeats.
fn distinct_lines(lines: &[String], options: Options) -> (Vec<usize>, usize) {
    let by_spelling = ByKey::new(lines, |line: &String| line.trim().to_lowercase());
    let mut set = OrderedSet::with_options(options, by_spelling);
    let mut duplicates = 0usize;
    for value in (0..).take(lines.len()) {
        if !set.insert(value) {
            duplicates += 1;
        }
    }
    info!(
        lines = lines.len(),
        distinct = set.len(),
        duplicates,
        depth = set.depth(),
        "indexed input"
    );

    let order = set
        .iter()
        .filter_map(|value| usize::try_from(value).ok())
        .collect();
    return (order, duplicates);
}

fn main() -> Result<(), DemoError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut options = options_from_env()?;
    let lines = io::stdin().lock().lines().collect::<Result<Vec<String>, _>>()?;
    options.capacity = lines.len();

    let (order, _) = distinct_lines(&lines, options);
    let mut out = io::stdout().lock();
    for i in order {
        writeln!(out, "{}", lines[i])?;
    }
    return Ok(());
}
