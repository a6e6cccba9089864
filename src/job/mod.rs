//! Job descriptions.
//!
//! A [`Job`] describes one invocation of an external tool: which
//! executable, which arguments in which order, what it reads and what it
//! produces. It is a plain value. Running it is the business of a
//! [`JobExecutor`](crate::executor::JobExecutor).

pub mod target_info;

use std::ffi::OsString;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{FileType, VirtualPath};

pub use target_info::{
    decode_target_info, encode_target_info, DecodeError, FrontendTargetInfo, Paths, Target,
};

/// One command-line token.
///
/// Paths are kept apart from flags so that path-aware consumers (response
/// file writers, path remappers) can treat them differently without
/// inspecting the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ArgTemplate {
    /// A literal token placed verbatim
    Flag(String),
    /// A reference to a file or directory
    Path(VirtualPath),
    /// A response file holding the remaining arguments, rendered as `@path`
    ResponseFilePath(VirtualPath),
}

impl ArgTemplate {
    /// Create a literal flag.
    pub fn flag(text: impl Into<String>) -> Self {
        ArgTemplate::Flag(text.into())
    }

    /// Create a path argument.
    pub fn path(path: VirtualPath) -> Self {
        ArgTemplate::Path(path)
    }

    /// Render the token exactly as it appears in argv.
    ///
    /// Paths keep their platform bytes, so a non-UTF-8 path reaches the
    /// tool unchanged.
    pub fn render(&self) -> OsString {
        match self {
            ArgTemplate::Flag(text) => OsString::from(text),
            ArgTemplate::Path(path) => path.to_os_string(),
            ArgTemplate::ResponseFilePath(path) => {
                let mut arg = OsString::from("@");
                arg.push(path.to_os_string());
                arg
            }
        }
    }
}

impl fmt::Display for ArgTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render().to_string_lossy())
    }
}

/// What a job is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum JobKind {
    /// Ask the frontend to describe a target as JSON
    PrintTargetInfo,
}

impl JobKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobKind::PrintTargetInfo => "print-target-info",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A path tagged with the kind of content it holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypedVirtualPath {
    pub file: VirtualPath,
    pub file_type: FileType,
}

impl TypedVirtualPath {
    pub fn new(file: VirtualPath, file_type: FileType) -> Self {
        TypedVirtualPath { file, file_type }
    }
}

/// An immutable description of a single tool invocation.
///
/// Built with [`Job::builder`]; once built, a job can only be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    module_name: String,
    kind: JobKind,
    tool: VirtualPath,
    command_line: Vec<ArgTemplate>,
    display_inputs: Vec<TypedVirtualPath>,
    inputs: Vec<TypedVirtualPath>,
    outputs: Vec<TypedVirtualPath>,
    requires_in_place_execution: bool,
    supports_response_files: bool,
}

impl Job {
    /// Start describing a job of `kind` that runs `tool`.
    pub fn builder(kind: JobKind, tool: VirtualPath) -> JobBuilder {
        JobBuilder {
            job: Job {
                module_name: String::new(),
                kind,
                tool,
                command_line: Vec::new(),
                display_inputs: Vec::new(),
                inputs: Vec::new(),
                outputs: Vec::new(),
                requires_in_place_execution: false,
                supports_response_files: false,
            },
        }
    }

    /// Diagnostic label; may be empty.
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn kind(&self) -> JobKind {
        self.kind
    }

    /// The executable to run.
    pub fn tool(&self) -> &VirtualPath {
        &self.tool
    }

    /// Arguments, in the order they must be passed.
    pub fn command_line(&self) -> &[ArgTemplate] {
        &self.command_line
    }

    /// Inputs shown to the user when logging the job.
    pub fn display_inputs(&self) -> &[TypedVirtualPath] {
        &self.display_inputs
    }

    pub fn inputs(&self) -> &[TypedVirtualPath] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[TypedVirtualPath] {
        &self.outputs
    }

    /// The executor must replace the current process instead of spawning.
    pub fn requires_in_place_execution(&self) -> bool {
        self.requires_in_place_execution
    }

    /// The executor may spill long argument lists into a response file.
    pub fn supports_response_files(&self) -> bool {
        self.supports_response_files
    }

    /// Render the arguments (without the tool) as argv.
    pub fn rendered_args(&self) -> Vec<OsString> {
        self.command_line.iter().map(ArgTemplate::render).collect()
    }

    /// Display the command for logs and error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.tool.name()];
        parts.extend(self.command_line.iter().map(ArgTemplate::to_string));
        parts.join(" ")
    }
}

/// Consuming builder for [`Job`].
#[derive(Debug, Clone)]
pub struct JobBuilder {
    job: Job,
}

impl JobBuilder {
    /// Set the module name.
    pub fn module_name(mut self, name: impl Into<String>) -> Self {
        self.job.module_name = name.into();
        self
    }

    /// Append one argument.
    pub fn arg(mut self, arg: ArgTemplate) -> Self {
        self.job.command_line.push(arg);
        self
    }

    /// Append several arguments, keeping their order.
    pub fn args(mut self, args: impl IntoIterator<Item = ArgTemplate>) -> Self {
        self.job.command_line.extend(args);
        self
    }

    pub fn display_input(mut self, input: TypedVirtualPath) -> Self {
        self.job.display_inputs.push(input);
        self
    }

    pub fn input(mut self, input: TypedVirtualPath) -> Self {
        self.job.inputs.push(input);
        self
    }

    pub fn output(mut self, output: TypedVirtualPath) -> Self {
        self.job.outputs.push(output);
        self
    }

    pub fn requires_in_place_execution(mut self, in_place: bool) -> Self {
        self.job.requires_in_place_execution = in_place;
        self
    }

    pub fn supports_response_files(mut self, supported: bool) -> Self {
        self.job.supports_response_files = supported;
        self
    }

    /// Finish the job.
    pub fn build(self) -> Job {
        self.job
    }
}
