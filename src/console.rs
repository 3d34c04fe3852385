//! Line-oriented text console.
//!
//! The engines never touch stdin/stdout directly. They talk to a `Console`,
//! which the binaries back with the process terminal and tests back with
//! in-memory buffers.
//!
//! ```
//! use std::io::Cursor;
//! use parlor_games::console::{Console, Terminal};
//!
//! let mut console = Terminal::new(Cursor::new("hit\n"), Vec::new());
//! let answer = console.ask("Do you want to (h)it or (s)tay?").unwrap();
//!
//! assert_eq!(answer, "hit");
//! assert_eq!(console.output_text(), "=> Do you want to (h)it or (s)tay?\n");
//! ```

use std::io::{self, BufRead, IsTerminal, StdinLock, Write};
use std::time::Duration;

use ::console::Term;

/// Display/input capability used by the turn engines.
pub trait Console {
    /// Write `text` followed by a newline.
    fn say(&mut self, text: &str) -> io::Result<()>;

    /// Clear the screen.
    fn clear(&mut self) -> io::Result<()>;

    /// Wait for `duration`. A zero duration returns immediately.
    fn pause(&mut self, duration: Duration);

    /// Read one line of input without its trailing newline.
    ///
    /// End of input is reported as `io::ErrorKind::UnexpectedEof`.
    fn read_line(&mut self) -> io::Result<String>;

    /// Write a `=> `-prefixed prompt line.
    fn prompt(&mut self, msg: &str) -> io::Result<()> {
        self.say(&format!("=> {msg}"))
    }

    /// Write an empty line.
    fn blank_line(&mut self) -> io::Result<()> {
        self.say("")
    }

    /// Prompt with `msg` and read the reply.
    fn ask(&mut self, msg: &str) -> io::Result<String> {
        self.prompt(msg)?;
        self.read_line()
    }
}

/// Read one line from `input`, newline stripped. Zero bytes read is end of input.
fn read_trimmed_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while waiting for an answer",
        ));
    }

    let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
    line.truncate(trimmed);
    Ok(line)
}

/// The process terminal.
///
/// Output, screen clearing and interactive line editing go through
/// `console::Term`. When stdin or stdout is redirected, lines are read from
/// stdin directly so piped input and end of input behave like `Terminal`.
#[derive(Debug)]
pub struct StdioTerminal {
    term: Term,
    piped: Option<StdinLock<'static>>,
}

impl StdioTerminal {
    #[must_use]
    pub fn new() -> Self {
        let term = Term::stdout();
        let stdin = io::stdin();
        // Term only edits lines when both ends are a terminal
        let piped = if stdin.is_terminal() && term.is_term() {
            None
        } else {
            Some(stdin.lock())
        };

        Self { term, piped }
    }

    /// The underlying `console::Term`.
    pub fn term(&self) -> &Term {
        &self.term
    }
}

impl Default for StdioTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdioTerminal {
    fn say(&mut self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    /// No-op when stdout is redirected.
    fn clear(&mut self) -> io::Result<()> {
        self.term.clear_screen()
    }

    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }

    fn read_line(&mut self) -> io::Result<String> {
        match self.piped.as_mut() {
            Some(input) => read_trimmed_line(input),
            None => self.term.read_line(),
        }
    }
}

/// A `Console` over any buffered reader and writer.
///
/// Buffers have no screen, so `clear` writes nothing.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Borrow the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Recover the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R> Terminal<R, Vec<u8>> {
    /// Everything written so far, as text.
    #[must_use]
    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        // Show everything before going quiet.
        let _ = self.output.flush();
        std::thread::sleep(duration);
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.output.flush()?;
        read_trimmed_line(&mut self.input)
    }
}
