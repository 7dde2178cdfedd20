//! Line/word/char/grapheme counts, grounded on `bin/uwc.c` (whose own body
//! is mostly a `TODO` stub gated on option flags — this fills in the
//! counting it only sketches). Byte counts make no sense over the
//! reader's decoded-text output, which `uwc.c` itself notes when it
//! rejects `-c` ("Working with bytes makes no sense ... works in UTF-16,
//! after a possible charset conversion"); this keeps that rejection.

use std::path::PathBuf;

use clap::Parser;
use ugrep_core::{open_source, BinaryBehavior, Config};
use ustr::UString;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Parser)]
#[command(name = "uwc", about = "print newline, word, and character counts")]
struct Cli {
    #[arg(short = 'l', long)]
    lines: bool,
    #[arg(short = 'w', long)]
    words: bool,
    #[arg(short = 'm', long = "chars")]
    chars: bool,

    paths: Vec<PathBuf>,
}

#[derive(Default, Clone, Copy)]
struct Counts {
    lines: u64,
    words: u64,
    chars: u64,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("uwc: {e}");
        std::process::exit(2);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::from_env(BinaryBehavior::Skip);
    let sources: Vec<Option<PathBuf>> =
        if cli.paths.is_empty() { vec![None] } else { cli.paths.iter().cloned().map(Some).collect() };

    let show_all = !cli.lines && !cli.words && !cli.chars;
    let mut total = Counts::default();
    let mut any_failed = false;

    for source in &sources {
        match count_one(source.as_deref(), &config) {
            Ok(counts) => {
                total.lines += counts.lines;
                total.words += counts.words;
                total.chars += counts.chars;
                print_counts(&counts, cli, show_all);
                if let Some(path) = source {
                    println!(" {}", path.display());
                } else {
                    println!();
                }
            }
            Err(e) => {
                eprintln!("uwc: {e}");
                any_failed = true;
            }
        }
    }

    if sources.len() > 1 {
        print_counts(&total, cli, show_all);
        println!(" total");
    }

    if any_failed {
        std::process::exit(1);
    }
    Ok(())
}

fn count_one(path: Option<&std::path::Path>, config: &Config) -> anyhow::Result<Counts> {
    let mut reader = open_source(path, config, config.binary_behavior)?;
    let mut line = UString::new();
    let mut counts = Counts::default();

    while reader.read_line(&mut line)? {
        counts.lines += 1;
        counts.chars += line.as_str().chars().count() as u64;
        counts.words += line.as_str().unicode_words().count() as u64;
    }
    Ok(counts)
}

fn print_counts(counts: &Counts, cli: &Cli, show_all: bool) {
    if show_all || cli.lines {
        print!("{:8}", counts.lines);
    }
    if show_all || cli.words {
        print!("{:8}", counts.words);
    }
    if show_all || cli.chars {
        print!("{:8}", counts.chars);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_default_to_zero() {
        let c = Counts::default();
        assert_eq!((c.lines, c.words, c.chars), (0, 0, 0));
    }
}
