use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

pub const RULE_WIDTH: usize = 60;

pub fn use_color() -> bool {
    std::io::stdout().is_terminal() && supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Human-readable output for the command handlers.
pub struct Console {
    out: Box<dyn Write + Send>,
    use_color: bool,
}

impl Console {
    pub fn new(out: Box<dyn Write + Send>, use_color: bool) -> Self {
        Self { out, use_color }
    }

    pub fn stdio() -> Self {
        Self::new(Box::new(io::stdout()), use_color())
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    pub fn blank(&mut self) -> io::Result<()> {
        self.line("")
    }

    pub fn rule(&mut self) -> io::Result<()> {
        self.line("-".repeat(RULE_WIDTH))
    }

    /// Writes captured tool output without adding a trailing blank line.
    pub fn passthrough(&mut self, text: &str) -> io::Result<()> {
        let text = text.trim_end();
        if text.is_empty() {
            return Ok(());
        }
        self.line(text)
    }

    pub fn success(&mut self, text: impl Display) -> io::Result<()> {
        let mark = if self.use_color {
            "\x1b[1;32m✓\x1b[0m"
        } else {
            "✓"
        };
        self.line(format_args!("{} {}", mark, text))
    }

    pub fn warning(&mut self, text: impl Display) -> io::Result<()> {
        let mark = if self.use_color {
            "\x1b[1;33m⚠\x1b[0m"
        } else {
            "⚠"
        };
        self.line(format_args!("{} {}", mark, text))
    }
}
