//! Configuration for the automapper.

use crate::decode::DEFAULT_TITLE_REJECT;

/// Configuration for the automapper.
///
/// Controls where the debug flag lives, which title lines are treated as
/// map decoration, and how messages shown to the player are prefixed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutomapperConfig {
    /// Name of the host variable holding the debug flag.
    pub debug_variable: String,

    /// Leading characters that disqualify a room title line.
    pub title_reject: Vec<char>,

    /// Prefix for messages shown to the player.
    pub echo_prefix: String,

    /// Prefix for debug messages shown to the player.
    pub debug_prefix: String,

    /// Prefix for the load banner.
    pub banner_prefix: String,
}

impl Default for AutomapperConfig {
    fn default() -> Self {
        Self {
            debug_variable: "automapper_debug".to_string(),
            title_reject: DEFAULT_TITLE_REJECT.to_vec(),
            echo_prefix: "[Mapper]".to_string(),
            debug_prefix: "[Mapper DEBUG]".to_string(),
            banner_prefix: "[Automapper]".to_string(),
        }
    }
}

impl AutomapperConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the debug variable name.
    #[must_use]
    pub fn with_debug_variable(mut self, name: impl Into<String>) -> Self {
        self.debug_variable = name.into();
        self
    }

    /// Builder method to set the title reject characters.
    #[must_use]
    pub fn with_title_reject(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.title_reject = chars.into_iter().collect();
        self
    }

    /// Builder method to set the echo prefix.
    #[must_use]
    pub fn with_echo_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.echo_prefix = prefix.into();
        self
    }

    /// Builder method to set the debug prefix.
    #[must_use]
    pub fn with_debug_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.debug_prefix = prefix.into();
        self
    }
}

/// Returns true if a debug variable value switches debugging on.
#[must_use]
pub fn is_truthy(value: &str) -> bool {
    matches!(value, "true" | "1")
}
