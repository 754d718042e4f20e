//! Command-line configuration of the `mudmap` binary.

use std::path::PathBuf;

use mudmap_foundation::{Error, Result};

/// Options parsed from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Transcripts replayed before the REPL starts.
    pub transcripts: Vec<PathBuf>,
    /// Replay and exit without starting the REPL.
    pub batch_mode: bool,
    /// Debug-level tracing.
    pub verbose: bool,
    /// Start with `automapper_debug=true`.
    pub debug: bool,
    /// Snapshot loaded before replaying.
    pub load: Option<PathBuf>,
    /// Snapshot written after replaying (and after the REPL exits).
    pub save: Option<PathBuf>,
    /// Print the room graph after replaying.
    pub dump_map: bool,
    /// Print help and exit.
    pub show_help: bool,
    /// Print the version and exit.
    pub show_version: bool,
}

impl RuntimeConfig {
    /// Parses arguments, not including the program name.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown options or options missing their value.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "-V" | "--version" => config.show_version = true,
                "-b" | "--batch" => config.batch_mode = true,
                "-v" | "--verbose" => config.verbose = true,
                "--debug" => config.debug = true,
                "--dump-map" => config.dump_map = true,
                "--load" => config.load = Some(Self::value(&arg, args.next())?),
                "--save" => config.save = Some(Self::value(&arg, args.next())?),
                other if other.starts_with('-') => {
                    return Err(Error::invalid_argument(format!("unknown option: {other}")));
                }
                path => config.transcripts.push(PathBuf::from(path)),
            }
        }

        Ok(config)
    }

    fn value(option: &str, value: Option<String>) -> Result<PathBuf> {
        value
            .map(PathBuf::from)
            .ok_or_else(|| Error::invalid_argument(format!("{option} requires a value")))
    }

    /// The default `tracing` filter directive.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
