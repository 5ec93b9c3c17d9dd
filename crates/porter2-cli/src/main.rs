//! porter2: stem words from the command line or stdin.

use std::io::{self, BufRead, BufWriter, Write};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use porter2_stem::Stemmer;

mod args;
mod tokenize;

use args::{Command, Options};

fn init_tracing(trace: bool) -> anyhow::Result<()> {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if trace {
        filter = filter.add_directive("porter2::trace=debug".parse()?);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

/// Write one output line for `word`.
fn emit(stemmer: &Stemmer, word: &str, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        let trace = stemmer.stem_traced(word);
        writeln!(out, "{}", serde_json::to_string(&trace)?)?;
    } else {
        writeln!(out, "{}\t{}", word, stemmer.stem(word))?;
    }
    Ok(())
}

/// Stem the words given as arguments, or every token of `input` if there are none.
/// Returns the number of words stemmed.
fn run(
    options: &Options,
    stemmer: &Stemmer,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let mut count = 0;

    if !options.words.is_empty() {
        for word in &options.words {
            emit(stemmer, word, options.json, out)?;
            count += 1;
        }
        return Ok(count);
    }

    for line in input.lines() {
        let line = line?;
        for token in tokenize::tokens(&line) {
            emit(stemmer, &token, options.json, out)?;
            count += 1;
        }
    }
    Ok(count)
}

fn main() -> anyhow::Result<()> {
    let options = match args::parse(std::env::args().skip(1))? {
        Command::Help => {
            println!("{}", args::USAGE);
            return Ok(());
        }
        Command::Run(options) => options,
    };

    init_tracing(options.trace)?;

    let config = options.resolve_config()?;
    debug!(
        trace = config.trace,
        variant = %config.variant,
        regions = %config.regions,
        "Starting stemmer"
    );
    let stemmer = Stemmer::new(config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let count = run(&options, &stemmer, io::stdin().lock(), &mut out)?;
    out.flush()?;

    info!("Stemmed {} words", count);
    Ok(())
}
