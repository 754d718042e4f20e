//! A host that writes to a terminal.

use std::collections::HashMap;
use std::io::{self, Stdout, Write};

use mudmap_core::Host;

/// Host backed by a writer for player-visible lines and `tracing` for the
/// internal log.
#[derive(Debug)]
pub struct ConsoleHost<W = Stdout> {
    out: W,
    variables: HashMap<String, String>,
    map_enabled: bool,
}

impl ConsoleHost<Stdout> {
    /// Creates a host echoing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> ConsoleHost<W> {
    /// Creates a host echoing to `out`.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            variables: HashMap::new(),
            map_enabled: false,
        }
    }

    /// Client variables.
    #[must_use]
    pub fn variables(&self) -> &HashMap<String, String> {
        &self.variables
    }

    /// Client variables sorted by name.
    #[must_use]
    pub fn sorted_variables(&self) -> Vec<(&str, &str)> {
        let mut vars: Vec<_> = self
            .variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        vars.sort_unstable();
        vars
    }

    /// Replaces all client variables.
    pub fn replace_variables(&mut self, variables: impl IntoIterator<Item = (String, String)>) {
        self.variables = variables.into_iter().collect();
    }

    /// Whether the client map is switched on.
    #[must_use]
    pub const fn is_map_enabled(&self) -> bool {
        self.map_enabled
    }

    /// The underlying writer.
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.out
    }

    /// Consumes the host, returning the writer.
    pub fn into_writer(self) -> W {
        self.out
    }
}

impl<W: Write> Host for ConsoleHost<W> {
    fn log(&mut self, message: &str) {
        tracing::debug!(target: "mudmap::host", "{message}");
    }

    fn echo(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{message}").and_then(|()| self.out.flush()) {
            tracing::warn!(error = %e, "failed to echo");
        }
    }

    fn variable(&self, name: &str) -> Option<String> {
        self.variables.get(name).cloned()
    }

    fn set_variable(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }

    fn set_map_enabled(&mut self, enabled: bool) {
        tracing::info!(enabled, "map toggled");
        self.map_enabled = enabled;
    }
}
