//! Job execution.
//!
//! An executor takes a [`Job`] and returns what the tool printed on
//! standard output. It honors the job's execution flags: in-place jobs
//! replace the current process, and only jobs that support response files
//! ever have their arguments spilled into one.

pub mod response_file;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::VirtualPath;
use crate::job::{ArgTemplate, Job};
use crate::util::process::ProcessBuilder;

pub use response_file::DEFAULT_RESPONSE_FILE_LIMIT;

/// Running a job failed.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("failed to spawn `{}`", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` failed with exit code {}\n{stderr}", status.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    Failed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("failed to replace the current process with `{}`", program.display())]
    InPlace {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write response file")]
    ResponseFile(#[source] io::Error),

    #[error("`{tool}` is not an executable path")]
    UnsupportedTool { tool: VirtualPath },
}

/// Runs jobs.
pub trait JobExecutor {
    /// Run `job` and return its captured standard output.
    ///
    /// For jobs that require in-place execution this does not return on
    /// success.
    fn execute(&self, job: &Job) -> Result<Vec<u8>, ExecutionError>;
}

/// Executor that runs jobs as operating-system processes.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    response_file_limit: usize,
    working_dir: Option<PathBuf>,
    temp_dir: Option<PathBuf>,
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        ProcessExecutor {
            response_file_limit: DEFAULT_RESPONSE_FILE_LIMIT,
            working_dir: None,
            temp_dir: None,
        }
    }
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Argument-list size in bytes above which response files are used.
    pub fn response_file_limit(mut self, limit: usize) -> Self {
        self.response_file_limit = limit;
        self
    }

    /// Directory jobs run in; relative paths resolve against it.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Directory for response files (defaults to the system temp dir).
    pub fn temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Build the process for `job`, spilling arguments if allowed and needed.
    ///
    /// The returned file, if any, must outlive the process.
    fn prepare(
        &self,
        job: &Job,
    ) -> Result<(ProcessBuilder, Option<tempfile::NamedTempFile>), ExecutionError> {
        let program = job
            .tool()
            .as_path()
            .ok_or_else(|| ExecutionError::UnsupportedTool {
                tool: job.tool().clone(),
            })?;

        let mut args = job.rendered_args();
        let mut spilled = None;

        if job.supports_response_files()
            && response_file::needs_response_file(&args, self.response_file_limit)
        {
            let dir = self.temp_dir.clone().unwrap_or_else(std::env::temp_dir);
            let file = response_file::write(&args, &dir).map_err(ExecutionError::ResponseFile)?;
            tracing::debug!(
                "Passing {} argument(s) through response file {}",
                args.len(),
                file.path().display()
            );
            args = vec![
                ArgTemplate::ResponseFilePath(VirtualPath::Temporary(file.path().to_path_buf()))
                    .render(),
            ];
            spilled = Some(file);
        }

        let mut process = ProcessBuilder::new(program).args(&args);
        if let Some(ref dir) = self.working_dir {
            process = process.cwd(dir);
        }

        Ok((process, spilled))
    }
}

impl JobExecutor for ProcessExecutor {
    fn execute(&self, job: &Job) -> Result<Vec<u8>, ExecutionError> {
        let (process, spilled) = self.prepare(job)?;
        tracing::debug!("Running {} job: {}", job.kind(), process.display_command());

        if job.requires_in_place_execution() {
            // The response file must survive the process replacement.
            if let Some(file) = spilled {
                file.into_temp_path()
                    .keep()
                    .map_err(|e| ExecutionError::ResponseFile(e.error))?;
            }
            let source = process.exec_replace();
            return Err(ExecutionError::InPlace {
                program: process.get_program().to_path_buf(),
                source,
            });
        }

        let output = process.exec().map_err(|source| ExecutionError::Spawn {
            program: process.get_program().to_path_buf(),
            source,
        })?;
        drop(spilled);

        if !output.status.success() {
            return Err(ExecutionError::Failed {
                command: process.display_command(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(output.stdout)
    }
}
