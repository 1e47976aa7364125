//! Editing gate over the syntax scanner
//!
//! The gate owns the single current verdict. Every buffer change replaces
//! it; an attempted newline is scanned before insertion and vetoed while
//! the buffer is malformed.

use scan_types::{Diagnostic, Language, Verdict};
use serde::{Deserialize, Serialize};
use syntax_scanner::scan;

/// Gate status, replaced wholesale by every scan.
///
/// Idle is the initial state and is re-entered only on a language switch,
/// a buffer replacement, or an explicit reset. Valid and Error are only
/// ever left by a newer scan; there is no timed auto-clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateStatus {
    /// No scan has run since the last reset.
    Idle,
    Valid,
    Error(Diagnostic),
}

impl GateStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, GateStatus::Error(_))
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            GateStatus::Error(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }
}

/// Decision for an attempted newline insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewlineDecision {
    Allow,
    /// The keystroke must have no effect on the buffer.
    Block(Diagnostic),
}

/// Stateful wrapper around the scanner enforcing the editing policy.
#[derive(Debug, Clone)]
pub struct ScanGate {
    language: Language,
    status: GateStatus,
}

impl ScanGate {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            status: GateStatus::Idle,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn status(&self) -> &GateStatus {
        &self.status
    }

    /// Switches language and drops any stored verdict; a stale diagnostic
    /// never survives a switch.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.status = GateStatus::Idle;
    }

    /// Returns to Idle without changing language.
    pub fn reset(&mut self) {
        self.status = GateStatus::Idle;
    }

    /// Re-scans after a buffer mutation and stores the fresh verdict.
    pub fn note_change(&mut self, source: &str) -> &GateStatus {
        self.status = match scan(source, self.language) {
            Verdict::Valid => GateStatus::Valid,
            Verdict::Invalid(diagnostic) => GateStatus::Error(diagnostic),
        };
        &self.status
    }

    /// Scans the buffer as it stands before a newline is inserted and
    /// decides whether the insertion may proceed.
    pub fn gate_newline(&mut self, source: &str) -> NewlineDecision {
        match scan(source, self.language) {
            Verdict::Valid => {
                self.status = GateStatus::Valid;
                NewlineDecision::Allow
            }
            Verdict::Invalid(diagnostic) => {
                self.status = GateStatus::Error(diagnostic.clone());
                NewlineDecision::Block(diagnostic)
            }
        }
    }
}
