//! Command-line options.

use std::path::PathBuf;

use anyhow::{bail, Context};
use porter2_core::{RegionMode, StemmerConfig, Variant};

pub const USAGE: &str = "\
porter2: Porter2 English stemmer

Usage: porter2 [options] [WORD...]

With no WORD, reads text from stdin, splits it into lowercase tokens and
stems each one.

Options:
  --trace                Log the word after every step (target porter2::trace)
  --json                 Print one JSON trace per word instead of word<TAB>stem
  --snowball             Use the full Snowball rule set (exceptions, step 5)
  --recompute-regions    Derive R1/R2 from the current word at every step
  --config FILE          Load stemmer options from a JSON file
  -h, --help             Show this help

Environment:
  PORTER2_TRACE, PORTER2_VARIANT, PORTER2_REGIONS    Option defaults
  RUST_LOG                                           Log filter (default: info)";

/// What the user asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(Options),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub trace: bool,
    pub json: bool,
    pub snowball: bool,
    pub recompute_regions: bool,
    pub config: Option<PathBuf>,
    pub words: Vec<String>,
}

/// Parse arguments (without the program name).
pub fn parse<I>(args: I) -> anyhow::Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--trace" => options.trace = true,
            "--json" => options.json = true,
            "--snowball" => options.snowball = true,
            "--recompute-regions" => options.recompute_regions = true,
            "--config" => {
                let path = args.next().context("--config needs a file path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--" => {
                options.words.extend(args.by_ref());
            }
            flag if flag.starts_with("--") => bail!("unknown option: {}", flag),
            word => options.words.push(word.to_string()),
        }
    }

    Ok(Command::Run(options))
}

impl Options {
    /// Config file (or environment) first, then command-line flags on top.
    pub fn resolve_config(&self) -> anyhow::Result<StemmerConfig> {
        let mut config = match &self.config {
            Some(path) => StemmerConfig::from_json_file(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => StemmerConfig::from_env().context("reading PORTER2_* environment")?,
        };

        if self.trace {
            config.trace = true;
        }
        if self.snowball {
            config.variant = Variant::Snowball;
        }
        if self.recompute_regions {
            config.regions = RegionMode::Recompute;
        }
        Ok(config)
    }
}
