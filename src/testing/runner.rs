//! Test runner implementation
//!
//! Runs every registered case in order, one subject process at a time, and
//! folds each outcome into a run-wide status.

use std::any::Any;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};

use colored::Colorize;

use crate::common::Result;
use crate::session::Spawner;

use super::case::{Outcome, Registry, TestCase};

/// Options that only affect what is printed
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print error detail for failed cases
    pub verbose: bool,
}

/// Aggregate pass/fail state for a whole run
///
/// Once a failure is recorded the run stays failed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStatus {
    passed: usize,
    failed: usize,
    timed_out: usize,
}

impl RunStatus {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed(_) => self.failed += 1,
            Outcome::TimedOut(_) => self.timed_out += 1,
        }
    }

    pub fn success(&self) -> bool {
        self.failed == 0 && self.timed_out == 0
    }

    /// 0 when every case passed, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Failed cases, timeouts included
    pub fn failed(&self) -> usize {
        self.failed + self.timed_out
    }

    pub fn timed_out(&self) -> usize {
        self.timed_out
    }
}

/// Run every case in `registry`, writing one status line per case to `out`
///
/// Failures inside a case never stop the run; only a failure to write to
/// `out` is returned as an error.
pub fn run<S, W>(
    registry: &Registry,
    spawner: &S,
    options: RunOptions,
    out: &mut W,
) -> Result<RunStatus>
where
    S: Spawner,
    W: Write,
{
    let mut status = RunStatus::default();

    for case in registry.iter() {
        // The subject may hang or write to the terminal, so show the name first
        write!(out, "{}\t\t", case.name())?;
        out.flush()?;

        let outcome = run_case(case, spawner);
        tracing::debug!(test = case.name(), ?outcome, "Test finished");

        report(out, case.name(), &outcome, options.verbose)?;
        status.record(&outcome);
    }
    out.flush()?;

    tracing::info!(
        passed = status.passed(),
        failed = status.failed(),
        timed_out = status.timed_out(),
        "Run complete"
    );
    Ok(status)
}

/// Spawn a fresh session for `case` and run its body
///
/// The session is dropped before returning, which tears down the subject.
fn run_case<S: Spawner>(case: &TestCase, spawner: &S) -> Outcome {
    let mut session = match spawner.spawn(case.args()) {
        Ok(session) => session,
        Err(e) => {
            tracing::debug!(test = case.name(), error = %e, "Could not start subject");
            return Outcome::from_error(e);
        }
    };

    match panic::catch_unwind(AssertUnwindSafe(|| case.invoke(&mut session))) {
        Ok(outcome) => outcome,
        Err(payload) => Outcome::Failed(Some(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panicked: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panicked: {msg}")
    } else {
        "panicked".to_string()
    }
}

fn report<W: Write>(out: &mut W, name: &str, outcome: &Outcome, verbose: bool) -> Result<()> {
    if outcome.passed() {
        writeln!(out, "[{}]", "PASS".green().bold())?;
        return Ok(());
    }

    writeln!(out, "[{}]", "FAIL".red())?;
    if verbose {
        if let Some(detail) = outcome.detail() {
            writeln!(out, "----- {name} FAILURE -----")?;
            writeln!(out, "{detail}")?;
            writeln!(out, "-----")?;
        }
    }
    Ok(())
}
