//! Minimal `grep` analogue: enough of `bin/ugrep.c`'s flag surface to
//! exercise the reader/engine core end to end, not a full reimplementation
//! of `grep`'s CLI (`spec.md` §1 Non-goal: "the per-utility CLI argument
//! parsing").

use std::path::{Path, PathBuf};

use clap::Parser;
use matcher::{Engine, EngineResult, IntervalList, MatchFlags};
use ugrep_core::{open_source, BinaryBehavior, Config};
use ustr::UString;

#[derive(Parser)]
#[command(name = "ugrep", about = "print lines matching a pattern")]
struct Cli {
    #[arg(short = 'i', long)]
    ignore_case: bool,
    #[arg(short = 'w', long)]
    word_regexp: bool,
    #[arg(short = 'x', long)]
    line_regexp: bool,
    #[arg(short = 'v', long)]
    invert_match: bool,
    #[arg(short = 'c', long)]
    count: bool,
    #[arg(short = 'o', long)]
    only_matching: bool,
    #[arg(short = 'E', long)]
    extended_regexp: bool,
    #[arg(short = 'F', long)]
    fixed_strings: bool,

    pattern: String,
    paths: Vec<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(any_match) => std::process::exit(if any_match { 0 } else { 1 }),
        Err(e) => {
            eprintln!("ugrep: {e}");
            std::process::exit(2);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = Config::from_env(BinaryBehavior::Skip);
    let flags = MatchFlags::new(cli.ignore_case, cli.word_regexp, cli.line_regexp);
    let engine = if cli.extended_regexp && !cli.fixed_strings {
        Engine::compile_regex(&cli.pattern, flags)?
    } else {
        Engine::compile_literal(&cli.pattern, flags)?
    };

    let mut any_match = false;
    let sources: Vec<Option<PathBuf>> =
        if cli.paths.is_empty() { vec![None] } else { cli.paths.iter().cloned().map(Some).collect() };

    for source in &sources {
        match search_one(source.as_deref(), &config, &engine, cli) {
            Ok(matched) => any_match |= matched,
            Err(e) => log::warn!("{e}"),
        }
    }
    Ok(any_match)
}

fn search_one(path: Option<&Path>, config: &Config, engine: &Engine, cli: &Cli) -> anyhow::Result<bool> {
    let mut reader = match open_source(path, config, config.binary_behavior) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("{e}");
            return Ok(false);
        }
    };

    if reader.is_binary() {
        println!("Binary file {} matches", reader.source_name());
        return Ok(true);
    }

    let mut line = UString::new();
    let mut intervals = IntervalList::new();
    let mut count = 0u64;
    let mut any = false;

    while reader.read_line(&mut line)? {
        let content = chomp_terminator(line.as_str());
        let result = engine.matches(content)?;
        let mut matched = !matches!(result, EngineResult::NoMatch);
        if cli.invert_match {
            matched = !matched;
        }
        if !matched {
            continue;
        }
        any = true;
        count += 1;
        if cli.count {
            continue;
        }
        if cli.only_matching && !cli.invert_match {
            intervals = IntervalList::new();
            engine.match_all(content, &mut intervals)?;
            for iv in intervals.iter() {
                let piece: String =
                    content.chars().skip(iv.lower as usize).take((iv.upper - iv.lower) as usize).collect();
                println!("{piece}");
            }
        } else {
            println!("{content}");
        }
    }

    if cli.count {
        println!("{count}");
    }
    Ok(any)
}

fn chomp_terminator(s: &str) -> &str {
    s.strip_suffix("\r\n").or_else(|| s.strip_suffix('\n')).or_else(|| s.strip_suffix('\r')).unwrap_or(s)
}
