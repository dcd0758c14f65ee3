use crate::domain::model::Poem;
use crate::domain::ports::Presenter;
use crate::utils::error::{FinderError, Result};
use std::io::Write;

/// Prints the first line of the poem, one line per call.
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl ConsolePresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn present(&mut self, poem: Option<&Poem>) -> Result<()> {
        let Some(poem) = poem else {
            return Ok(());
        };

        match poem.first_line() {
            Some(line) => {
                writeln!(self.out, "{}", line).map_err(|e| FinderError::PresentError {
                    message: e.to_string(),
                })?;
                self.out.flush().map_err(|e| FinderError::PresentError {
                    message: e.to_string(),
                })?;
            }
            None => {
                tracing::warn!("Poem \"{}\" by {} has no lines", poem.title, poem.author);
            }
        }

        Ok(())
    }
}
