//! Minimal `cat` analogue, grounded on `bin/ucat.c`: line numbering,
//! squeeze-blank, and a `ustring_dump`-based non-printable display mode
//! (`SPEC_FULL.md` §11 supplemented features).

use std::path::PathBuf;

use clap::Parser;
use ugrep_core::{open_source, BinaryBehavior, Config};
use ustr::UString;

#[derive(Parser)]
#[command(name = "ucat", about = "concatenate and print text")]
struct Cli {
    #[arg(short = 'n', long)]
    number: bool,
    #[arg(short = 's', long)]
    squeeze_blank: bool,
    /// Make non-printable code points visible via `UString::dump`.
    #[arg(short = 'v', long = "show-nonprinting")]
    show_nonprinting: bool,

    paths: Vec<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("ucat: {e}");
        std::process::exit(2);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::from_env(BinaryBehavior::Text);
    let sources: Vec<Option<PathBuf>> =
        if cli.paths.is_empty() { vec![None] } else { cli.paths.iter().cloned().map(Some).collect() };

    for source in &sources {
        if let Err(e) = cat_one(source.as_deref(), &config, cli) {
            eprintln!("ucat: {e}");
        }
    }
    Ok(())
}

fn cat_one(path: Option<&std::path::Path>, config: &Config, cli: &Cli) -> anyhow::Result<()> {
    let mut reader = open_source(path, config, config.binary_behavior)?;
    let mut line = UString::new();
    let mut last_was_blank = false;

    while reader.read_line(&mut line)? {
        let is_blank = line.as_str().trim_end_matches(['\n', '\r']).is_empty();
        if cli.squeeze_blank && is_blank && last_was_blank {
            continue;
        }
        last_was_blank = is_blank;

        if cli.show_nonprinting {
            line.dump();
        }
        if cli.number {
            print!("{:6}\t{}", reader.lineno(), line.as_str());
        } else {
            print!("{}", line.as_str());
        }
    }
    Ok(())
}
