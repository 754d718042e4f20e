//! Terminal input for the mapper console.
//!
//! [`Repl`](crate::Repl) reads through a [`LineEditor`]; the binary uses
//! [`RustylineEditor`], tests script their own.

use std::borrow::Cow;

use mudmap_foundation::{Error, ErrorKind, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

/// Client commands offered for completion.
pub const COMMANDS: [&str; 9] = [
    "#vars", "#map", "#map on", "#map off", "#triggers", "#save", "#load", "#help", "#quit",
];

/// One read from the terminal.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadResult {
    /// A pasted MUD line or a `#` command.
    Line(String),
    /// Ctrl+C; the current line is dropped.
    Interrupted,
    /// Ctrl+D or closed input.
    Eof,
}

/// Source of console input.
pub trait LineEditor {
    /// Shows `prompt` and waits for the next line.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Editor`] when the terminal cannot be read.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Remembers an entered line for recall.
    fn add_history(&mut self, line: &str);
}

#[derive(Helper, Completer, Hinter, Validator)]
struct MudmapHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for MudmapHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('#') {
            Cow::Owned(format!("\x1b[33m{line}\x1b[0m"))
        } else {
            Cow::Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes `#` commands at the start of the line.
struct CommandCompleter;

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let typed = &line[..pos];
        if !typed.starts_with('#') {
            return Ok((pos, Vec::new()));
        }

        let candidates = COMMANDS
            .iter()
            .filter(|command| command.starts_with(typed))
            .map(|command| Pair {
                display: (*command).to_string(),
                replacement: (*command).to_string(),
            })
            .collect();

        Ok((0, candidates))
    }
}

/// Console input on rustyline, with `#` command completion.
pub struct RustylineEditor {
    editor: Editor<MudmapHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Opens the terminal.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Editor`] if rustyline cannot set up the terminal.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Editor(e.to_string())))?
            .build();

        let helper = MudmapHelper {
            completer: CommandCompleter,
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Editor(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Editor(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
