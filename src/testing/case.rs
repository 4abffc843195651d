//! Test case definitions
//!
//! A test case is a display name, the arguments bobbin is started with, and
//! a body that drives the resulting session.

use std::fmt;

use crate::common::{Error, Result};
use crate::session::Interact;

/// Body of a test case: `Ok(true)` passes, anything else fails
pub type Body = Box<dyn Fn(&mut dyn Interact) -> Result<bool>>;

/// A single registered test case
pub struct TestCase {
    name: String,
    args: Vec<String>,
    body: Body,
}

impl TestCase {
    pub fn new<F>(name: &str, args: &[&str], body: F) -> Self
    where
        F: Fn(&mut dyn Interact) -> Result<bool> + 'static,
    {
        Self {
            name: name.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            body: Box::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arguments appended to the subject binary for this case
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Run the body against a live session
    pub fn invoke(&self, session: &mut dyn Interact) -> Outcome {
        Outcome::from_result((self.body)(session))
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// What happened when a test case ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// The body returned `false` (no detail) or raised an error
    Failed(Option<String>),
    /// An expectation wait ran out of time
    TimedOut(String),
}

impl Outcome {
    pub fn from_result(result: Result<bool>) -> Self {
        match result {
            Ok(true) => Self::Passed,
            Ok(false) => Self::Failed(None),
            Err(e) => Self::from_error(e),
        }
    }

    pub fn from_error(error: Error) -> Self {
        if error.is_timeout() {
            Self::TimedOut(error.to_string())
        } else {
            Self::Failed(Some(error.to_string()))
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Error text shown in verbose mode
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Passed | Self::Failed(None) => None,
            Self::Failed(Some(detail)) | Self::TimedOut(detail) => Some(detail),
        }
    }
}

/// Ordered collection of test cases, built explicitly at startup
#[derive(Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a case, builder style
    pub fn register<F>(mut self, name: &str, args: &[&str], body: F) -> Self
    where
        F: Fn(&mut dyn Interact) -> Result<bool> + 'static,
    {
        self.push(TestCase::new(name, args, body));
        self
    }

    pub fn push(&mut self, case: TestCase) {
        self.cases.push(case);
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestCase> {
        self.cases.iter()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Display names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.cases.iter().map(TestCase::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::scripted::ScriptedSpawner;
    use crate::session::Spawner;

    #[test]
    fn test_outcome_classification() {
        assert_eq!(Outcome::from_result(Ok(true)), Outcome::Passed);
        assert_eq!(Outcome::from_result(Ok(false)), Outcome::Failed(None));

        let timed_out = Outcome::from_result(Err(Error::expect_timeout("\\]", 1000)));
        assert!(matches!(timed_out, Outcome::TimedOut(_)));
        assert!(!timed_out.passed());
        assert!(timed_out.detail().unwrap().contains("\\]"));

        let raised = Outcome::from_result(Err(Error::assertion("wrong banner")));
        assert_eq!(
            raised.detail(),
            Some("Test assertion failed: wrong banner")
        );
    }

    #[test]
    fn test_false_has_no_detail() {
        assert_eq!(Outcome::Failed(None).detail(), None);
        assert_eq!(Outcome::Passed.detail(), None);
    }

    #[test]
    fn test_registry_keeps_order() {
        let registry = Registry::new()
            .register("second_is_first", &[], |_| Ok(true))
            .register("first_is_second", &["-m", "plus"], |_| Ok(false));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["second_is_first", "first_is_second"]);
        let args: Vec<_> = registry.iter().map(|c| c.args().to_vec()).collect();
        assert_eq!(args[1], vec!["-m".to_string(), "plus".to_string()]);
    }

    #[test]
    fn test_invoke_drives_session() {
        let case = TestCase::new("greets", &[], |p| {
            p.send_line("HI")?;
            p.expect("HELLO")?;
            Ok(true)
        });
        let spawner = ScriptedSpawner::new("HELLO\r\n");
        let mut session = spawner.spawn(case.args()).unwrap();

        assert_eq!(case.invoke(&mut session), Outcome::Passed);
        assert_eq!(spawner.sent(), vec!["HI\n".to_string()]);
    }
}
