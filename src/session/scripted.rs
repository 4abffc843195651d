//! In-memory sessions that replay canned subject output

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{Interact, Spawner};
use crate::common::{Error, Result};

/// Timeout reported by scripted expectation failures
const SCRIPTED_TIMEOUT_MS: u64 = 1000;

/// A session whose output is fixed up front
pub struct ScriptedSession {
    output: String,
    cursor: usize,
    closed: bool,
    sent: Rc<RefCell<Vec<String>>>,
    live: Rc<Cell<usize>>,
}

impl Interact for ScriptedSession {
    fn send(&mut self, text: &str) -> Result<()> {
        self.sent.borrow_mut().push(text.to_string());
        Ok(())
    }

    fn expect(&mut self, pattern: &str) -> Result<String> {
        let re = regex::Regex::new(pattern).map_err(|e| Error::InvalidPattern(e.to_string()))?;
        match re.find(&self.output[self.cursor..]) {
            Some(m) => {
                let matched = m.as_str().to_string();
                self.cursor += m.end();
                Ok(matched)
            }
            None if self.closed => Err(Error::UnexpectedEof {
                pattern: pattern.to_string(),
            }),
            None => Err(Error::expect_timeout(pattern, SCRIPTED_TIMEOUT_MS)),
        }
    }

    fn expect_eof(&mut self) -> Result<()> {
        if self.closed {
            self.cursor = self.output.len();
            Ok(())
        } else {
            Err(Error::expect_timeout("<eof>", SCRIPTED_TIMEOUT_MS))
        }
    }
}

impl Drop for ScriptedSession {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

/// Hands out scripted sessions and records how it was used
#[derive(Default)]
pub struct ScriptedSpawner {
    output: String,
    closed: bool,
    fail_spawn: bool,
    spawned: RefCell<Vec<Vec<String>>>,
    sent: Rc<RefCell<Vec<String>>>,
    live: Rc<Cell<usize>>,
}

impl ScriptedSpawner {
    /// Every session prints `output` and keeps its terminal open
    pub fn new(output: &str) -> Self {
        Self {
            output: output.to_string(),
            ..Self::default()
        }
    }

    /// Sessions close their terminal after printing their output
    pub fn closing(mut self) -> Self {
        self.closed = true;
        self
    }

    /// Every spawn attempt fails
    pub fn broken() -> Self {
        Self {
            fail_spawn: true,
            ..Self::default()
        }
    }

    /// Argument lists passed to each spawn, in order
    pub fn spawned(&self) -> Vec<Vec<String>> {
        self.spawned.borrow().clone()
    }

    /// Everything written to any session
    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }

    /// Sessions not yet dropped
    pub fn live(&self) -> usize {
        self.live.get()
    }
}

impl Spawner for ScriptedSpawner {
    type Session = ScriptedSession;

    fn spawn(&self, args: &[String]) -> Result<ScriptedSession> {
        self.spawned.borrow_mut().push(args.to_vec());
        if self.fail_spawn {
            return Err(Error::spawn("scripted", "no such file or directory"));
        }
        if self.live.get() != 0 {
            return Err(Error::Pty("previous session still live".to_string()));
        }
        self.live.set(self.live.get() + 1);
        Ok(ScriptedSession {
            output: self.output.clone(),
            cursor: 0,
            closed: self.closed,
            sent: Rc::clone(&self.sent),
            live: Rc::clone(&self.live),
        })
    }
}
