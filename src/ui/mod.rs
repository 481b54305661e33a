//! The console seam: plain-text menus over a cleared screen with blocking
//! line input. Scenes produce display lines; this module owns the terminal.

use std::io::{self, BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

/// Line-oriented console. One cleared frame, one menu, one line of input
/// per loop iteration.
pub struct Console {
    stdout: io::Stdout,
    stdin: io::Stdin,
}

impl Console {
    pub fn new() -> Self {
        Self { stdout: io::stdout(), stdin: io::stdin() }
    }

    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))
    }

    pub fn print_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.stdout, "{}", line)?;
        }
        self.stdout.flush()
    }

    /// Prompts and blocks for one line, trimmed. `None` means end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.stdout, "{}", prompt)?;
        self.stdout.flush()?;

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// The acknowledgment pause shown after message lines.
    pub fn pause(&mut self) -> io::Result<()> {
        self.read_line("Press Enter to continue...").map(|_| ())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
