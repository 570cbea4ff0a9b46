//! Interactive level prompt
//!
//! The session first asks whether images should only be saved or also displayed, then
//! keeps asking for recursion levels until the user submits an empty line or input ends.
//! Invalid answers are explained and asked again; a failed render is reported and the loop
//! carries on.

use crate::algorithm::level::RecursionLevel;
use crate::io::error::{Result, SnowflakeError};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// What happens with a rendered image after it has been saved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Save the image file only
    FileOnly,
    /// Save the image file and open it in the system viewer
    FileAndDisplay,
}

impl OutputMode {
    /// Interpret a menu answer: `0` saves only, `1` also displays
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim() {
            "0" => Some(Self::FileOnly),
            "1" => Some(Self::FileAndDisplay),
            _ => None,
        }
    }

    /// Check if images should be opened after saving
    pub const fn shows_image(self) -> bool {
        matches!(self, Self::FileAndDisplay)
    }
}

/// Result of rendering one level on behalf of the session
#[derive(Debug)]
pub struct RenderOutcome {
    /// Where the image was written
    pub path: PathBuf,
    /// Why the image could not be displayed, if display was requested and failed
    pub display_error: Option<SnowflakeError>,
}

/// Prompt loop reading answers from `input` and writing messages to `output`
pub struct Session<R, W> {
    input: R,
    output: W,
    max_level: u32,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session accepting levels up to `max_level`
    pub const fn new(input: R, output: W, max_level: u32) -> Self {
        Self {
            input,
            output,
            max_level,
        }
    }

    /// Ask for the output mode until a valid answer arrives
    ///
    /// Returns `None` if input ends first.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the terminal fails
    pub fn choose_output_mode(&mut self) -> Result<Option<OutputMode>> {
        loop {
            write!(
                self.output,
                "Choose output mode:\n  0 - save to file only\n  1 - save to file and display\nYour choice (0 or 1): "
            )?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(mode) = OutputMode::from_choice(&answer) {
                return Ok(Some(mode));
            }
            writeln!(self.output, "Please enter 0 or 1.\n")?;
        }
    }

    /// Ask for a recursion level until a valid one arrives
    ///
    /// Returns `None` on an empty line or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the terminal fails
    pub fn next_level(&mut self) -> Result<Option<RecursionLevel>> {
        loop {
            write!(
                self.output,
                "\nEnter a recursion level (integer from 0 to {})\nor press Enter to quit: ",
                self.max_level
            )?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            if answer.trim().is_empty() {
                return Ok(None);
            }

            match RecursionLevel::parse(&answer, self.max_level) {
                Ok(level) => return Ok(Some(level)),
                Err(SnowflakeError::InvalidParameter { reason, .. }) => {
                    writeln!(self.output, "Level {reason}. Please try again.")?;
                }
                Err(other) => return Err(other),
            }
        }
    }

    /// Run the full prompt loop, calling `render` for every accepted level
    ///
    /// Returns the number of levels rendered successfully.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the terminal fails. Render failures are
    /// reported to the user and do not stop the loop.
    pub fn run<F>(&mut self, mut render: F) -> Result<usize>
    where
        F: FnMut(RecursionLevel, OutputMode) -> Result<RenderOutcome>,
    {
        let Some(mode) = self.choose_output_mode()? else {
            writeln!(self.output)?;
            return Ok(0);
        };

        let mut rendered = 0;
        while let Some(level) = self.next_level()? {
            writeln!(self.output, "Generating Koch snowflake at level {level}...")?;
            match render(level, mode) {
                Ok(outcome) => {
                    rendered += 1;
                    writeln!(self.output, "Saved to {}", outcome.path.display())?;
                    if let Some(err) = outcome.display_error {
                        writeln!(self.output, "{err} (the file was still saved)")?;
                    }
                }
                Err(err) => writeln!(self.output, "Failed to render level {level}: {err}")?,
            }
        }

        writeln!(self.output, "Exiting.")?;
        Ok(rendered)
    }

    /// Consume the session, returning the output writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
