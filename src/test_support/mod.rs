//! Test utilities and mocks for Mooring unit tests.
//!
//! This module provides mock implementations of the two collaborators a
//! target-info query needs: a toolchain that resolves tools and an
//! executor that runs jobs.
//!
//! # Example
//!
//! ```rust,ignore
//! use mooring::test_support::{fixtures, MockExecutor, MockProcessOutput, MockToolchain};
//!
//! #[test]
//! fn test_example() {
//!     let toolchain = MockToolchain::new();
//!     let exec = MockExecutor::new();
//!     exec.expect_contains("-print-target-info", MockProcessOutput::success(fixtures::MACOS_TARGET_INFO));
//!
//!     // Use mocks in tests...
//! }
//! ```

pub mod fixtures;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{bail, Result};

use crate::executor::{ExecutionError, JobExecutor};
use crate::job::Job;
use crate::toolchain::{Tool, ToolResolutionError, ToolResolver};

/// Mock process output for testing command execution.
#[derive(Debug, Clone)]
pub struct MockProcessOutput {
    /// Exit status code (0 = success).
    pub status: i32,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
}

impl MockProcessOutput {
    /// Create a successful output with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        MockProcessOutput {
            status: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Create a failure output with the given stderr and status code.
    pub fn failure(status: i32, stderr: impl Into<String>) -> Self {
        MockProcessOutput {
            status,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Check if the process succeeded.
    pub fn success_status(&self) -> bool {
        self.status == 0
    }
}

/// Pattern for matching commands in MockExecutor.
#[derive(Debug, Clone)]
pub enum CommandPattern {
    /// Exact match on full command string.
    Exact(String),
    /// Match if command contains substring.
    Contains(String),
    /// Match any command.
    Any,
}

impl CommandPattern {
    /// Check if this pattern matches the given command.
    pub fn matches(&self, cmd: &str) -> bool {
        match self {
            CommandPattern::Exact(s) => cmd == s,
            CommandPattern::Contains(s) => cmd.contains(s),
            CommandPattern::Any => true,
        }
    }
}

/// Expectation for a command execution.
#[derive(Debug, Clone)]
pub struct CommandExpectation {
    /// Pattern to match against commands.
    pub pattern: CommandPattern,
    /// Output to return when matched.
    pub output: MockProcessOutput,
    /// Number of times this expectation can be used (None = unlimited).
    pub times: Option<usize>,
    /// Number of times this expectation has been used.
    pub used: usize,
}

impl CommandExpectation {
    /// Create a new expectation.
    pub fn new(pattern: CommandPattern, output: MockProcessOutput) -> Self {
        CommandExpectation {
            pattern,
            output,
            times: None,
            used: 0,
        }
    }

    /// Set the number of times this expectation can be used.
    pub fn times(mut self, n: usize) -> Self {
        self.times = Some(n);
        self
    }

    /// Check if this expectation can still be used.
    pub fn available(&self) -> bool {
        match self.times {
            Some(n) => self.used < n,
            None => true,
        }
    }
}

#[derive(Debug, Default)]
struct MockExecutorState {
    expectations: Vec<CommandExpectation>,
    calls: Vec<String>,
    jobs: Vec<Job>,
    default_output: Option<MockProcessOutput>,
}

/// Mock job executor for testing.
///
/// Matches each job's rendered command line against the registered
/// expectations and records every job it is given.
#[derive(Debug, Default)]
pub struct MockExecutor {
    state: Mutex<MockExecutorState>,
}

impl MockExecutor {
    /// Create a new mock executor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an expectation for an exact command match.
    pub fn expect(&self, cmd: &str, output: MockProcessOutput) -> &Self {
        self.expect_pattern(CommandExpectation::new(
            CommandPattern::Exact(cmd.to_string()),
            output,
        ))
    }

    /// Add an expectation for a command containing a substring.
    pub fn expect_contains(&self, substring: &str, output: MockProcessOutput) -> &Self {
        self.expect_pattern(CommandExpectation::new(
            CommandPattern::Contains(substring.to_string()),
            output,
        ))
    }

    /// Add a custom expectation.
    pub fn expect_pattern(&self, expectation: CommandExpectation) -> &Self {
        self.state.lock().unwrap().expectations.push(expectation);
        self
    }

    /// Set a default output for commands that don't match any expectation.
    pub fn set_default(&self, output: MockProcessOutput) -> &Self {
        self.state.lock().unwrap().default_output = Some(output);
        self
    }

    /// Get all commands that were run.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Get all jobs that were run.
    pub fn jobs(&self) -> Vec<Job> {
        self.state.lock().unwrap().jobs.clone()
    }

    /// Verify that all expectations with a specific count were satisfied.
    pub fn verify(&self) -> Result<()> {
        let state = self.state.lock().unwrap();
        for (i, exp) in state.expectations.iter().enumerate() {
            if let Some(expected) = exp.times {
                if exp.used != expected {
                    bail!(
                        "expectation {} was used {} times, expected {}",
                        i,
                        exp.used,
                        expected
                    );
                }
            }
        }
        Ok(())
    }

    fn run(&self, job: &Job) -> Result<MockProcessOutput> {
        let full_cmd = job.display_command();
        let mut state = self.state.lock().unwrap();
        state.calls.push(full_cmd.clone());
        state.jobs.push(job.clone());

        for exp in &mut state.expectations {
            if exp.pattern.matches(&full_cmd) && exp.available() {
                exp.used += 1;
                return Ok(exp.output.clone());
            }
        }

        if let Some(ref default) = state.default_output {
            return Ok(default.clone());
        }

        bail!("unexpected command: {}", full_cmd)
    }
}

impl JobExecutor for MockExecutor {
    fn execute(&self, job: &Job) -> Result<Vec<u8>, ExecutionError> {
        let output = self.run(job).map_err(|e| ExecutionError::Spawn {
            program: job.tool().as_path().map(Path::to_path_buf).unwrap_or_default(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()),
        })?;

        if !output.success_status() {
            return Err(ExecutionError::Failed {
                command: job.display_command(),
                status: Some(output.status),
                stderr: output.stderr,
            });
        }

        Ok(output.stdout.into_bytes())
    }
}

/// Mock toolchain with a fixed frontend path.
#[derive(Debug)]
pub struct MockToolchain {
    frontend: Option<PathBuf>,
    resolutions: AtomicUsize,
}

impl MockToolchain {
    /// A toolchain whose frontend lives in the temp dir.
    pub fn new() -> Self {
        Self::with_frontend(std::env::temp_dir().join("swift-frontend"))
    }

    /// A toolchain with the given frontend path.
    pub fn with_frontend(path: impl Into<PathBuf>) -> Self {
        MockToolchain {
            frontend: Some(path.into()),
            resolutions: AtomicUsize::new(0),
        }
    }

    /// A toolchain without a frontend.
    pub fn missing() -> Self {
        MockToolchain {
            frontend: None,
            resolutions: AtomicUsize::new(0),
        }
    }

    /// The path returned for the frontend.
    ///
    /// Panics for [`MockToolchain::missing`].
    pub fn frontend_path(&self) -> &Path {
        self.frontend.as_deref().unwrap()
    }

    /// Number of times a tool was resolved.
    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }
}

impl Default for MockToolchain {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolResolver for MockToolchain {
    fn resolve_tool(&self, tool: Tool) -> Result<PathBuf, ToolResolutionError> {
        self.resolutions.fetch_add(1, Ordering::SeqCst);
        self.frontend
            .clone()
            .ok_or_else(|| ToolResolutionError::NotFound {
                tool,
                searched: vec!["mock".to_string()],
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolchain::{TargetInfoQuery, Toolchain};

    #[test]
    fn test_mock_executor_matches_and_records() {
        let toolchain = MockToolchain::new();
        let job = toolchain.target_info_job(&TargetInfoQuery::default()).unwrap();

        let exec = MockExecutor::new();
        exec.expect_pattern(
            CommandExpectation::new(
                CommandPattern::Contains("-print-target-info".to_string()),
                MockProcessOutput::success("{}"),
            )
            .times(1),
        );

        assert_eq!(exec.execute(&job).unwrap(), b"{}");
        assert_eq!(exec.jobs(), vec![job.clone()]);
        exec.verify().unwrap();

        // Expectation exhausted and no default.
        assert!(matches!(
            exec.execute(&job),
            Err(ExecutionError::Spawn { .. })
        ));
    }

    #[test]
    fn test_mock_executor_exact_match() {
        let toolchain = MockToolchain::new();
        let job = toolchain.target_info_job(&TargetInfoQuery::default()).unwrap();

        let exec = MockExecutor::new();
        exec.expect(&job.display_command(), MockProcessOutput::failure(2, "nope"));

        let err = exec.execute(&job).unwrap_err();
        assert!(matches!(err, ExecutionError::Failed { status: Some(2), .. }));
    }
}
