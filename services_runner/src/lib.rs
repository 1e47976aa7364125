//! # Execution Runner Service
//!
//! Contract between the workbench and an external execution sandbox, plus a
//! deterministic simulated sandbox for demos and tests.
//!
//! ## Philosophy
//!
//! - **Typed requests**: Execution is a structured request/report exchange,
//!   not string plumbing
//! - **Advisory gating**: The caller holds the current scan verdict; the
//!   runner never consults the gate and a runner failure never alters it
//! - **Simulatable**: The backend is a trait; tests and demos run against
//!   the simulated sandbox
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - An HTTP client (a real sandbox transport lives in its own host crate)
//! - A process supervisor or resource manager
//! - A compiler

use scan_types::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for one execution request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run:{}", self.0)
    }
}

/// Sandbox runtime coordinates for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunnerSpec {
    pub runtime: &'static str,
    pub version: &'static str,
    pub file_name: &'static str,
}

/// Runtime the sandbox should use for a language.
pub fn runner_spec(language: Language) -> RunnerSpec {
    match language {
        Language::Python => RunnerSpec {
            runtime: "python",
            version: "3.10.0",
            file_name: "main.py",
        },
        Language::Java => RunnerSpec {
            runtime: "java",
            version: "15.0.2",
            file_name: "Main.java",
        },
        Language::Cpp => RunnerSpec {
            runtime: "cpp",
            version: "10.2.0",
            file_name: "main.cpp",
        },
    }
}

/// One submission to the sandbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    pub run_id: RunId,
    pub language: Language,
    pub source: String,
}

impl ExecutionRequest {
    pub fn new(language: Language, source: impl Into<String>) -> Self {
        Self {
            run_id: RunId::new(),
            language,
            source: source.into(),
        }
    }
}

/// What came back from the sandbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub stdout: String,
    pub stderr: String,
    pub compile_error: Option<String>,
    pub exit_code: i32,
}

impl ExecutionReport {
    /// Clean run with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            compile_error: None,
            exit_code: 0,
        }
    }

    /// User-facing rendering of the report: compilation error first, then
    /// runtime error (with any output above it), then plain output, and
    /// always the exit code.
    pub fn summary(&self) -> String {
        let mut text = if let Some(compile_error) = &self.compile_error {
            format!("Compilation error:\n{}", compile_error)
        } else if !self.stderr.is_empty() {
            let mut text = String::new();
            if !self.stdout.is_empty() {
                text.push_str(&format!("Output:\n{}\n\n", self.stdout));
            }
            text.push_str(&format!("Runtime error:\n{}", self.stderr));
            text
        } else if !self.stdout.is_empty() {
            format!("Output:\n{}", self.stdout)
        } else {
            String::from("Program executed successfully (no output)")
        };
        text.push_str(&format!("\n\n[Exit code: {}]", self.exit_code));
        text
    }
}

/// Runner failure, entirely outside the scan/gate domain.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("sandbox transport failure: {0}")]
    Transport(String),

    #[error("sandbox rejected the request: {0}")]
    Rejected(String),
}

/// Execution sandbox capability.
pub trait ExecutionBackend {
    fn execute(&mut self, request: &ExecutionRequest) -> Result<ExecutionReport, RunnerError>;
}

/// Deterministic stand-in sandbox.
///
/// Recognizes a handful of canned source patterns and reports a generic
/// success for everything else; never fails.
#[derive(Debug, Default)]
pub struct SimulatedSandbox;

impl SimulatedSandbox {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutionBackend for SimulatedSandbox {
    fn execute(&mut self, request: &ExecutionRequest) -> Result<ExecutionReport, RunnerError> {
        Ok(ExecutionReport::success(simulated_stdout(&request.source)))
    }
}

fn simulated_stdout(source: &str) -> String {
    if source.contains("print(\"Hello") || source.contains("println(") || source.contains("cout <<")
    {
        return String::from("Hello, World!");
    }
    if source.contains("for") && (source.contains("range") || source.contains("int i")) {
        return String::from("0\n1\n2\n3\n4");
    }
    if source.contains("fibonacci") || source.contains("fib") {
        return String::from("0, 1, 1, 2, 3, 5, 8, 13, 21, 34");
    }
    if source.contains("factorial") {
        return String::from("120");
    }
    String::from("Program executed successfully.")
}
