//! Line-editing terminal input
//!
//! Used instead of plain stdin when it is a terminal: arrow keys, editing
//! and history of the lines entered in this session. Ctrl-D and Ctrl-C end
//! the session like end of input.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use tracing::debug;

use songbook_common::{Error, LineSource, Result};

pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(readline_error)?;
        Ok(Self { editor })
    }
}

impl LineSource for Terminal {
    fn next_line(&mut self, prompt: &str, output: &mut dyn Write) -> Result<Option<String>> {
        // Tables written to the session output must appear before the prompt
        output.flush()?;

        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => {
                debug!("Terminal input ended");
                Ok(None)
            }
            Err(e) => Err(readline_error(e)),
        }
    }
}

fn readline_error(e: ReadlineError) -> Error {
    match e {
        ReadlineError::Io(err) => Error::Io(err),
        other => Error::Io(io::Error::new(io::ErrorKind::Other, other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_keep_their_kind() {
        let err = readline_error(ReadlineError::Io(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "closed",
        )));
        assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_other_errors_become_io_errors() {
        let err = readline_error(ReadlineError::Eof);
        assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::Other));
    }
}
