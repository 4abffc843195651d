//! Pseudo-terminal sessions backed by expectrl

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use expectrl::{Eof, Regex, Session};

use super::{Interact, Spawner};
use crate::common::{Error, Result};

/// A subject process attached to a pseudo-terminal
///
/// Dropping the session terminates the child if it is still running.
pub struct PtySession {
    session: Session,
    timeout_ms: u64,
}

impl PtySession {
    /// Spawn `program` with `args` and bound every expectation wait by `timeout`
    pub fn spawn(program: &Path, args: &[String], timeout: Duration) -> Result<Self> {
        let name = program.display().to_string();
        tracing::debug!(program = %name, ?args, "Spawning subject");

        let mut command = Command::new(program);
        command.args(args);

        let mut session = Session::spawn(command).map_err(|e| Error::spawn(&name, e))?;
        session.set_expect_timeout(Some(timeout));

        Ok(Self {
            session,
            timeout_ms: timeout.as_millis() as u64,
        })
    }
}

fn map_expect_error(pattern: &str, timeout_ms: u64, error: expectrl::Error) -> Error {
    match error {
        expectrl::Error::ExpectTimeout => Error::expect_timeout(pattern, timeout_ms),
        expectrl::Error::Eof => Error::UnexpectedEof {
            pattern: pattern.to_string(),
        },
        other => Error::Pty(other.to_string()),
    }
}

impl Interact for PtySession {
    fn send(&mut self, text: &str) -> Result<()> {
        tracing::trace!(?text, "send");
        self.session.send(text).map_err(|e| Error::Pty(e.to_string()))
    }

    fn expect(&mut self, pattern: &str) -> Result<String> {
        // Pattern errors surface as InvalidPattern, not as pty errors
        regex::Regex::new(pattern).map_err(|e| Error::InvalidPattern(e.to_string()))?;

        tracing::trace!(pattern, "expect");
        let timeout_ms = self.timeout_ms;
        let captures = self
            .session
            .expect(Regex(pattern))
            .map_err(|e| map_expect_error(pattern, timeout_ms, e))?;

        Ok(captures
            .get(0)
            .map(|m| String::from_utf8_lossy(m).into_owned())
            .unwrap_or_default())
    }

    fn expect_eof(&mut self) -> Result<()> {
        tracing::trace!("expect eof");
        let timeout_ms = self.timeout_ms;
        self.session
            .expect(Eof)
            .map(|_| ())
            .map_err(|e| map_expect_error("<eof>", timeout_ms, e))
    }
}

/// Spawns the subject binary with a fixed expectation timeout
#[derive(Debug, Clone)]
pub struct PtySpawner {
    program: PathBuf,
    timeout: Duration,
}

impl PtySpawner {
    pub fn new(program: PathBuf, timeout: Duration) -> Self {
        Self { program, timeout }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Spawner for PtySpawner {
    type Session = PtySession;

    fn spawn(&self, args: &[String]) -> Result<PtySession> {
        PtySession::spawn(&self.program, args, self.timeout)
    }
}
