//! Interactive sessions with the subject process
//!
//! A session is one spawned subject attached to a pseudo-terminal. Test
//! cases only see the [`Interact`] trait, so the runner can be driven by
//! scripted sessions in tests.

mod pty;
#[cfg(test)]
pub(crate) mod scripted;

pub use pty::{PtySession, PtySpawner};

use crate::common::{Error, Result};

/// Send input to a subject and wait for its output
pub trait Interact {
    /// Write raw text to the subject's terminal
    fn send(&mut self, text: &str) -> Result<()>;

    /// Block until `pattern` (a regular expression) appears in the output
    ///
    /// Returns the matched text. Output before the match is consumed.
    fn expect(&mut self, pattern: &str) -> Result<String>;

    /// Block until the subject closes its terminal
    fn expect_eof(&mut self) -> Result<()>;

    /// Write a line of text followed by a newline
    fn send_line(&mut self, line: &str) -> Result<()> {
        self.send(&format!("{line}\n"))
    }

    /// Send a control character, e.g. `'d'` for Ctrl-D
    fn send_control(&mut self, key: char) -> Result<()> {
        let code = control_code(key)?;
        self.send(&code.to_string())
    }
}

/// Creates one session per test case
pub trait Spawner {
    type Session: Interact;

    fn spawn(&self, args: &[String]) -> Result<Self::Session>;
}

fn control_code(key: char) -> Result<char> {
    match key.to_ascii_uppercase() {
        c @ '@'..='_' => Ok(char::from(c as u8 & 0x1f)),
        _ => Err(Error::assertion(format!("no control code for '{key}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_codes() {
        assert_eq!(control_code('d').unwrap(), '\x04');
        assert_eq!(control_code('C').unwrap(), '\x03');
        assert_eq!(control_code('[').unwrap(), '\x1b');
        assert!(control_code('1').is_err());
    }
}
