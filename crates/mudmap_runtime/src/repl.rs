//! The interactive loop.
//!
//! Every entered line goes to [`Session::execute`]: `#` commands are run,
//! anything else is fed to the triggers as if the MUD had sent it.

use std::io::{self, Stdout, Write};

use mudmap_foundation::{Error, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor, W = Stdout> {
    /// The line editor for input.
    editor: E,

    /// The automapper session.
    session: Session<W>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor, Stdout> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E, Stdout> {
    /// Creates a new REPL with the given editor and a fresh session.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "map> ".to_string(),
        }
    }
}

impl<E: LineEditor, W: Write + 'static> Repl<E, W> {
    /// Replaces the session.
    #[must_use]
    pub fn with_session<W2>(self, session: Session<W2>) -> Repl<E, W2> {
        Repl {
            editor: self.editor,
            session,
            show_banner: self.show_banner,
            prompt: self.prompt,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session<W> {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session<W> {
        &mut self.session
    }

    /// Consumes the REPL, returning the session.
    pub fn into_session(self) -> Session<W> {
        self.session
    }

    /// Runs the REPL loop until EOF or `#quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            Self::print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&line);

        if trimmed == "#quit" {
            return Ok(false);
        }

        if let Err(e) = self.session.execute(&line) {
            Self::print_error(&e);
        }
        Ok(true)
    }

    fn print_error(error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    fn print_banner() {
        println!("\x1b[1;36mmudmap\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Paste MUD output or type #help. Use Ctrl+D or #quit to exit.\n");
        let _ = io::stdout().flush();
    }
}
