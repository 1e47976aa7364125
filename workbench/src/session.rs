//! Workbench session state machine

use editor_shell::{Key, ShellCore, ShellOutcome};
use scan_types::Language;
use services_codegen::{strip_code_fences, CodeGenerator, CodegenError, GenerationRequest};
use services_journal::{Journal, JournalEntry};
use services_runner::{runner_spec, ExecutionBackend, ExecutionRequest, RunnerError};
use services_status::StatusView;
use thiserror::Error;

use crate::config::WorkbenchConfig;

/// Why the workbench refused or failed an action.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The gate holds an error verdict; fix the buffer first.
    #[error("syntax error must be fixed before running")]
    InvalidSource,

    /// The buffer has nothing but whitespace.
    #[error("nothing to run")]
    BlankSource,

    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

/// One editing-and-running session over pluggable backends.
pub struct Workbench<R: ExecutionBackend, G: CodeGenerator> {
    shell: ShellCore,
    status: StatusView,
    journal: Journal,
    runner: R,
    generator: G,
    output: String,
}

impl<R: ExecutionBackend, G: CodeGenerator> Workbench<R, G> {
    pub fn new(config: &WorkbenchConfig, runner: R, generator: G) -> Self {
        let shell = ShellCore::new(config.default_language).with_tab_width(config.tab_width);
        let mut status = StatusView::new();
        status.apply(shell.status());
        Self {
            shell,
            status,
            journal: Journal::with_capacity(config.journal_capacity),
            runner,
            generator,
            output: String::new(),
        }
    }

    pub fn shell(&self) -> &ShellCore {
        &self.shell
    }

    pub fn status_view(&self) -> &StatusView {
        &self.status
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Output panel content from the most recent run.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn language(&self) -> Language {
        self.shell.language()
    }

    pub fn source(&self) -> String {
        self.shell.source()
    }

    /// Forwards one keystroke to the shell and relays the verdict to the
    /// status view; a blocked newline is journaled.
    pub fn handle_key(&mut self, key: Key) -> ShellOutcome {
        let outcome = self.shell.apply_key(key);
        self.status.apply(self.shell.status());

        if let ShellOutcome::NewlineBlocked(diagnostic) = &outcome {
            let mut entry = JournalEntry::warn("newline blocked")
                .with_source("editor_shell")
                .with_field("diagnostic", diagnostic.message());
            if let Some(line) = diagnostic.line {
                entry = entry.with_field("line", line.to_string());
            }
            self.journal.record(entry);
        }
        outcome
    }

    /// Switches language: template installed, verdict idle, output cleared.
    pub fn select_language(&mut self, language: Language) {
        self.shell.select_language(language);
        self.status.apply(self.shell.status());
        self.output.clear();
        self.journal.record(
            JournalEntry::info("language selected")
                .with_source("workbench")
                .with_field("language", language.as_str()),
        );
    }

    /// Restores the current language's template and clears the output.
    pub fn clear(&mut self) {
        self.shell.reset();
        self.status.apply(self.shell.status());
        self.output.clear();
        self.journal
            .record(JournalEntry::info("buffer cleared").with_source("workbench"));
    }

    /// Dismisses the error banner without touching the verdict.
    pub fn dismiss_banner(&mut self) {
        self.status.dismiss_banner();
    }

    /// Submits the buffer to the sandbox.
    ///
    /// The gate's verdict is advisory: an error verdict refuses the run,
    /// but an idle one (template or freshly generated code) goes through.
    /// Runner failures land in the output and journal; the verdict is
    /// untouched.
    pub fn run(&mut self) -> Result<&str, SessionError> {
        if self.shell.status().is_error() {
            return Err(SessionError::InvalidSource);
        }
        if self.shell.buffer().is_blank() {
            return Err(SessionError::BlankSource);
        }

        let request = ExecutionRequest::new(self.language(), self.source());
        let spec = runner_spec(request.language);
        self.journal.record(
            JournalEntry::info("run submitted")
                .with_source("services_runner")
                .with_field("run_id", request.run_id.to_string())
                .with_field("runtime", spec.runtime)
                .with_field("version", spec.version),
        );

        match self.runner.execute(&request) {
            Ok(report) => {
                self.journal.record(
                    JournalEntry::info("run completed")
                        .with_source("services_runner")
                        .with_field("run_id", request.run_id.to_string())
                        .with_field("exit_code", report.exit_code.to_string()),
                );
                self.output = report.summary();
                Ok(&self.output)
            }
            Err(error) => {
                self.journal.record(
                    JournalEntry::error("run failed")
                        .with_source("services_runner")
                        .with_field("run_id", request.run_id.to_string())
                        .with_field("error", error.to_string()),
                );
                self.output = format!(
                    "Execution failed: {}\n\nPlease check your connection and try again.",
                    error
                );
                Err(error.into())
            }
        }
    }

    /// Appends the termination notice to the output panel.
    pub fn stop(&mut self) {
        if !self.output.is_empty() {
            self.output.push_str("\n\n");
        }
        self.output.push_str("[Process terminated by user]");
        self.journal
            .record(JournalEntry::info("run stopped").with_source("workbench"));
    }

    /// Generates code from a natural-language prompt and installs it as the
    /// buffer; the gate goes idle and the next edit scans the replacement.
    pub fn generate(&mut self, prompt: &str) -> Result<(), SessionError> {
        let request = GenerationRequest::new(prompt, self.language());
        match self.generator.generate(&request) {
            Ok(text) => {
                let code = strip_code_fences(&text);
                self.shell.load_source(&code);
                self.status.apply(self.shell.status());
                self.journal.record(
                    JournalEntry::info("code generated")
                        .with_source("services_codegen")
                        .with_field("language", request.language.as_str())
                        .with_field("lines", code.lines().count().to_string()),
                );
                Ok(())
            }
            Err(error) => {
                self.journal.record(
                    JournalEntry::error("generation failed")
                        .with_source("services_codegen")
                        .with_field("error", error.to_string()),
                );
                Err(error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services_codegen::CannedGenerator;
    use services_runner::{ExecutionReport, SimulatedSandbox};
    use services_status::IndicatorState;

    fn workbench() -> Workbench<SimulatedSandbox, CannedGenerator> {
        Workbench::new(
            &WorkbenchConfig::default(),
            SimulatedSandbox::new(),
            CannedGenerator::new(),
        )
    }

    fn type_text(bench: &mut Workbench<SimulatedSandbox, CannedGenerator>, text: &str) {
        for ch in text.chars() {
            bench.handle_key(Key::Char(ch));
        }
    }

    struct FailingSandbox;

    impl ExecutionBackend for FailingSandbox {
        fn execute(&mut self, _request: &ExecutionRequest) -> Result<ExecutionReport, RunnerError> {
            Err(RunnerError::Transport(String::from("connection refused")))
        }
    }

    #[test]
    fn test_new_session_is_idle_with_template() {
        let bench = workbench();
        assert_eq!(bench.language(), Language::Python);
        assert_eq!(bench.source(), Language::Python.starting_template());
        assert_eq!(bench.status_view().indicator(), IndicatorState::Idle);
        assert_eq!(bench.output(), "");
    }

    #[test]
    fn test_run_template_succeeds() {
        let mut bench = workbench();
        let output = bench.run().unwrap().to_string();
        assert!(output.contains("Hello, World!"));
        assert!(output.contains("[Exit code: 0]"));
    }

    #[test]
    fn test_run_refused_while_invalid() {
        let mut bench = workbench();
        bench.select_language(Language::Cpp);
        bench.shell.load_source("");
        type_text(&mut bench, "cout << \"Hi\"");
        assert_eq!(bench.status_view().indicator(), IndicatorState::Error);

        assert!(matches!(bench.run(), Err(SessionError::InvalidSource)));
    }

    #[test]
    fn test_run_refused_for_blank_buffer() {
        let mut bench = workbench();
        bench.shell.load_source("   \n  ");
        assert!(matches!(bench.run(), Err(SessionError::BlankSource)));
    }

    #[test]
    fn test_runner_failure_reported_and_verdict_untouched() {
        let mut bench = Workbench::new(
            &WorkbenchConfig::default(),
            FailingSandbox,
            CannedGenerator::new(),
        );
        let before = bench.shell().status().clone();

        assert!(matches!(bench.run(), Err(SessionError::Runner(_))));
        assert!(bench.output().contains("Execution failed"));
        assert_eq!(*bench.shell().status(), before);
        assert!(bench
            .journal()
            .entries()
            .any(|entry| entry.message == "run failed"));
    }

    #[test]
    fn test_stop_appends_notice() {
        let mut bench = workbench();
        bench.run().unwrap();
        bench.stop();
        assert!(bench.output().ends_with("[Process terminated by user]"));
    }

    #[test]
    fn test_generate_replaces_buffer_and_goes_idle() {
        let mut bench = workbench();
        bench.generate("count to five").unwrap();
        assert!(bench.source().contains("range(5)"));
        assert_eq!(bench.status_view().indicator(), IndicatorState::Idle);
    }

    #[test]
    fn test_generate_empty_prompt_fails() {
        let mut bench = workbench();
        assert!(matches!(
            bench.generate("  "),
            Err(SessionError::Codegen(CodegenError::EmptyPrompt))
        ));
        // The buffer is untouched on failure.
        assert_eq!(bench.source(), Language::Python.starting_template());
    }

    #[test]
    fn test_language_switch_clears_output_and_verdict() {
        let mut bench = workbench();
        bench.run().unwrap();
        assert!(!bench.output().is_empty());

        bench.select_language(Language::Java);
        assert_eq!(bench.output(), "");
        assert_eq!(bench.status_view().indicator(), IndicatorState::Idle);
        assert_eq!(bench.source(), Language::Java.starting_template());
    }

    #[test]
    fn test_blocked_newline_is_journaled() {
        let mut bench = workbench();
        bench.select_language(Language::Cpp);
        bench.shell.load_source("");
        type_text(&mut bench, "cout << \"Hi\"");
        bench.handle_key(Key::Enter);

        let warnings = bench.journal().at_least(services_journal::LogLevel::Warn);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, "newline blocked");
    }
}
