//! Core utilities and shared types
//!
//! This module decides where command output goes: straight to stdout, or through
//! the minus pager when a person is reading it in a terminal.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Set to any value to write straight to stdout even in a terminal
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// adapts it to be compatible with Rust's standard I/O traits.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn pager(&self) -> &Pager {
        &self.pager
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Destination of command output
pub enum Output {
    Stdout,
    Paged(Pager),
}

impl Output {
    /// Page only when stdout is a terminal and paging was not turned off
    pub fn detect() -> Self {
        Self::choose(
            io::stdout().is_terminal(),
            std::env::var_os(NO_PAGER_ENV).is_some(),
        )
    }

    fn choose(is_terminal: bool, no_pager: bool) -> Self {
        if is_terminal && !no_pager {
            Output::Paged(Pager::new())
        } else {
            Output::Stdout
        }
    }

    /// Whether output is shown to a person, so colors are worth emitting
    pub fn is_interactive(&self) -> bool {
        matches!(self, Output::Paged(_)) || io::stdout().is_terminal()
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            Output::Stdout => Box::new(io::stdout()),
            Output::Paged(pager) => Box::new(PagerWriter::new(pager.clone())),
        }
    }

    /// Hand the collected output to the pager, if any, and wait for it to close
    pub fn finish(self) -> anyhow::Result<()> {
        match self {
            Output::Stdout => io::stdout().flush()?,
            Output::Paged(pager) => minus::page_all(pager)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, false, true)]
    #[case(true, true, false)]
    #[case(false, false, false)]
    #[case(false, true, false)]
    fn pages_only_interactive_terminals(
        #[case] is_terminal: bool,
        #[case] no_pager: bool,
        #[case] paged: bool,
    ) {
        let output = Output::choose(is_terminal, no_pager);
        assert_eq!(matches!(output, Output::Paged(_)), paged);
    }

    #[test]
    fn pager_writer_accepts_utf8() {
        let mut writer = PagerWriter::new(Pager::new());
        let written = writer.write("Insert: `集中`\n".as_bytes()).unwrap();

        assert_eq!(written, "Insert: `集中`\n".len());
    }

    #[test]
    fn pager_writer_rejects_invalid_utf8() {
        let mut writer = PagerWriter::new(Pager::new());
        let result = writer.write(&[0xff, 0xfe]);

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }
}
