//! Collation-aware sort, grounded on `bin/usort.c`. The original keeps an
//! ICU-collated red-black tree keyed by `UString`, doubling as a
//! duplicate-count multiset (`-u` drops counts, otherwise each line keeps a
//! repeat counter printed back out). There is no ICU collator in this
//! stack, so ordering falls back to `str`'s own (code-point) `Ord` — a
//! simplification documented in `DESIGN.md`. `-f` reuses `ustr::UString`'s
//! full case-fold mapping as the sort key, the same fold the literal match
//! engine uses for case-insensitive comparison.

use std::path::PathBuf;

use clap::Parser;
use ugrep_core::{open_source, BinaryBehavior, Config};
use ustr::{CaseKind, UString};

#[derive(Parser)]
#[command(name = "usort", about = "sort lines of text")]
struct Cli {
    #[arg(short = 'b', long = "ignore-leading-blanks")]
    ignore_leading_blanks: bool,
    #[arg(short = 'f', long = "ignore-case")]
    ignore_case: bool,
    #[arg(short = 'r', long)]
    reverse: bool,
    #[arg(short = 'u', long)]
    unique: bool,

    paths: Vec<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("usort: {e}");
        std::process::exit(2);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::from_env(BinaryBehavior::Skip);
    let sources: Vec<Option<PathBuf>> =
        if cli.paths.is_empty() { vec![None] } else { cli.paths.iter().cloned().map(Some).collect() };

    let mut lines: Vec<String> = Vec::new();
    for source in &sources {
        if let Err(e) = collect(source.as_deref(), &config, cli, &mut lines) {
            eprintln!("usort: {e}");
        }
    }

    lines.sort_by(|a, b| sort_key(a, cli).cmp(&sort_key(b, cli)));
    if cli.reverse {
        lines.reverse();
    }
    if cli.unique {
        lines.dedup_by(|a, b| sort_key(a, cli) == sort_key(b, cli));
    }

    for line in &lines {
        println!("{line}");
    }
    Ok(())
}

fn collect(
    path: Option<&std::path::Path>,
    config: &Config,
    cli: &Cli,
    out: &mut Vec<String>,
) -> anyhow::Result<()> {
    let mut reader = open_source(path, config, config.binary_behavior)?;
    let mut line = UString::new();
    while reader.read_line(&mut line)? {
        line.chomp();
        if cli.ignore_leading_blanks {
            line.ltrim(None);
        }
        out.push(line.as_str().to_string());
    }
    Ok(())
}

/// Equality under `-u`/ordering under the default comparator both key off
/// this: fold-cased under `-f`, verbatim otherwise.
fn sort_key(line: &str, cli: &Cli) -> String {
    if cli.ignore_case {
        let mut folded = UString::new();
        folded.fullcase(line, CaseKind::Fold, false);
        folded.into_string()
    } else {
        line.to_string()
    }
}
