//! Services provided by the MUD client hosting the automapper.

/// Diagnostic sinks, persisted variables and map toggles of the host client.
///
/// Every call is fire-and-forget.
pub trait Host {
    /// Writes an internal diagnostic line (not shown to the player).
    fn log(&mut self, message: &str);

    /// Shows a line in the player's output window.
    fn echo(&mut self, message: &str);

    /// Reads a persisted client variable.
    fn variable(&self, name: &str) -> Option<String>;

    /// Writes a persisted client variable.
    fn set_variable(&mut self, name: &str, value: &str);

    /// Turns the map on or off in the client.
    fn set_map_enabled(&mut self, enabled: bool);
}

impl<H: Host + ?Sized> Host for &mut H {
    fn log(&mut self, message: &str) {
        (**self).log(message);
    }

    fn echo(&mut self, message: &str) {
        (**self).echo(message);
    }

    fn variable(&self, name: &str) -> Option<String> {
        (**self).variable(name)
    }

    fn set_variable(&mut self, name: &str, value: &str) {
        (**self).set_variable(name, value);
    }

    fn set_map_enabled(&mut self, enabled: bool) {
        (**self).set_map_enabled(enabled);
    }
}
