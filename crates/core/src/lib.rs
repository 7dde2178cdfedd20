//! Shared plumbing for the six binaries: environment-driven encoding
//! configuration, source selection, and the error taxonomy used across
//! the whole stack.
//!
//! `spec.md` §9's "Global state" design note says a reimplementation is
//! best served by "a single configuration value threaded through
//! constructors and a RAII-style guard collection scoped to `main`."
//! The guard-collection half of that note has no separate type here:
//! ordinary Rust ownership and `Drop` already give every `Reader`,
//! pattern, and `IntervalList` deterministic, reverse-order cleanup
//! without a manual shutdown registry (see `DESIGN.md`). What remains
//! is the configuration value, `Config`, built once per process from
//! environment variables and CLI flags and passed by reference from
//! there on — replacing the C globals in `misc/env.c`.

use std::env;
use std::io::IsTerminal;
use std::path::Path;

use encoding_rs::Encoding;
use log::{debug, warn};

pub use searcher::{BinaryBehavior, ErrorKind};
pub use ustr::NormalizeMode;

/// Environment-and-flag-driven configuration threaded through every
/// binary (`spec.md` §6 "Encoding configuration", §9 "Global state").
#[derive(Debug, Clone)]
pub struct Config {
    pub system_encoding: &'static Encoding,
    pub inputs_encoding: Option<&'static Encoding>,
    pub stdin_encoding: Option<&'static Encoding>,
    pub outputs_encoding: Option<&'static Encoding>,
    pub binary_behavior: BinaryBehavior,
    pub normalize: NormalizeMode,
}

impl Config {
    /// Reads `UGREP_SYSTEM_ENCODING`, `UGREP_INPUTS_ENCODING`,
    /// `UGREP_STDIN_ENCODING`, `UGREP_OUTPUTS_ENCODING`; an unrecognized
    /// encoding name is a warning, not a fatal error, and is ignored
    /// (`spec.md` §6: "an invalid name is rejected with a warning and
    /// ignored").
    pub fn from_env(default_binary_behavior: BinaryBehavior) -> Self {
        let system_encoding = resolve_env_encoding("UGREP_SYSTEM_ENCODING").unwrap_or(encoding_rs::UTF_8);
        Config {
            system_encoding,
            inputs_encoding: resolve_env_encoding("UGREP_INPUTS_ENCODING"),
            stdin_encoding: resolve_env_encoding("UGREP_STDIN_ENCODING"),
            outputs_encoding: resolve_env_encoding("UGREP_OUTPUTS_ENCODING"),
            binary_behavior: default_binary_behavior,
            normalize: NormalizeMode::None,
        }
    }

    /// `spec.md` §6: "stdin inherits from outputs if stdin is a
    /// terminal, otherwise from inputs."
    pub fn resolve_stdin_encoding(&self) -> Option<&'static Encoding> {
        if let Some(e) = self.stdin_encoding {
            return Some(e);
        }
        if std::io::stdin().is_terminal() {
            self.outputs_encoding
        } else {
            self.inputs_encoding
        }
    }
}

fn resolve_env_encoding(var: &str) -> Option<&'static Encoding> {
    let name = env::var(var).ok()?;
    match Encoding::for_label(name.as_bytes()) {
        Some(enc) => {
            debug!("{var}={name} resolved to {}", enc.name());
            Some(enc)
        }
        None => {
            warn!("{var}={name} is not a recognized encoding name; ignoring");
            None
        }
    }
}

/// Opens `path` (or stdin, for `None`) through the default `mmap`/`stdio`
/// driver selection and runs it through `Reader::open` with `config`'s
/// resolved encoding and binary behavior (`spec.md` §4.1, §6).
pub fn open_source(
    path: Option<&Path>,
    config: &Config,
    binary_behavior: BinaryBehavior,
) -> anyhow::Result<searcher::Reader> {
    match path {
        Some(p) => {
            debug!("opening {}", p.display());
            let driver = searcher::MmapDriver::open(p)
                .map_err(|e| anyhow::anyhow!("{}: {e}", p.display()))?;
            searcher::Reader::open(
                Box::new(driver),
                p.display().to_string(),
                config.inputs_encoding,
                config.system_encoding,
                binary_behavior,
            )
            .map_err(anyhow::Error::from)
        }
        None => {
            debug!("opening stdin");
            let stdin = std::io::stdin();
            let driver = searcher::StdioDriver::new(stdin, false);
            searcher::Reader::open(
                Box::new(driver),
                "<stdin>",
                config.resolve_stdin_encoding(),
                config.system_encoding,
                binary_behavior,
            )
            .map_err(anyhow::Error::from)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_env_encoding_is_ignored_not_fatal() {
        assert!(resolve_env_encoding("UGREP_TEST_VAR_DOES_NOT_EXIST").is_none());
    }
}
