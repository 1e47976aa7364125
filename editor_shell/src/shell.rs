//! Editing surface state machine
//!
//! Applies typed keystrokes to the buffer and caret, re-scanning through
//! the gate on every mutation and letting the gate veto Enter.

use alloc::string::String;

use crate::{
    buffer::{Caret, SourceBuffer},
    gate::{GateStatus, NewlineDecision, ScanGate},
    key::Key,
    snapshot::ShellSnapshot,
};
use scan_types::{Diagnostic, Language};

/// Spaces inserted for one Tab keystroke unless configured otherwise.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Outcome of applying one keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutcome {
    /// Keystroke had no effect.
    Continue,
    /// Buffer or caret changed; the gate status is current.
    Changed,
    /// Enter was suppressed by the gate; the buffer is untouched.
    NewlineBlocked(Diagnostic),
}

/// The editing surface state machine.
pub struct ShellCore {
    buffer: SourceBuffer,
    caret: Caret,
    gate: ScanGate,
    tab_width: usize,
}

impl ShellCore {
    /// Creates a shell holding the language's starting template, with the
    /// gate idle and the caret at the end of the template.
    pub fn new(language: Language) -> Self {
        let buffer = SourceBuffer::from_text(language.starting_template());
        let caret = buffer.end_caret();
        Self {
            buffer,
            caret,
            gate: ScanGate::new(language),
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }

    pub fn buffer(&self) -> &SourceBuffer {
        &self.buffer
    }

    pub fn caret(&self) -> Caret {
        self.caret
    }

    pub fn language(&self) -> Language {
        self.gate.language()
    }

    pub fn status(&self) -> &GateStatus {
        self.gate.status()
    }

    /// Full buffer text, for collaborators.
    pub fn source(&self) -> String {
        self.buffer.text()
    }

    /// Applies one keystroke and returns the outcome.
    pub fn apply_key(&mut self, key: Key) -> ShellOutcome {
        match key {
            Key::Char(ch) => {
                if self.buffer.insert_char(self.caret, ch) {
                    self.caret.column += 1;
                    self.rescan();
                    ShellOutcome::Changed
                } else {
                    ShellOutcome::Continue
                }
            }
            Key::Tab => {
                let spaces = " ".repeat(self.tab_width);
                match self.buffer.insert_text(self.caret, &spaces) {
                    Some(caret) => {
                        self.caret = caret;
                        self.rescan();
                        ShellOutcome::Changed
                    }
                    None => ShellOutcome::Continue,
                }
            }
            Key::Enter => self.apply_enter(),
            Key::Backspace => match self.buffer.backspace(self.caret) {
                Some(caret) => {
                    self.caret = caret;
                    self.rescan();
                    ShellOutcome::Changed
                }
                None => ShellOutcome::Continue,
            },
            Key::Left => self.move_left(),
            Key::Right => self.move_right(),
            Key::Up => self.move_up(),
            Key::Down => self.move_down(),
            Key::Home => {
                if self.caret.column > 0 {
                    self.caret.column = 0;
                    ShellOutcome::Changed
                } else {
                    ShellOutcome::Continue
                }
            }
            Key::End => {
                let end = self.buffer.line_len(self.caret.line);
                if self.caret.column < end {
                    self.caret.column = end;
                    ShellOutcome::Changed
                } else {
                    ShellOutcome::Continue
                }
            }
        }
    }

    /// The gate sees the buffer as it stands before the newline; a blocked
    /// Enter leaves buffer and caret untouched.
    fn apply_enter(&mut self) -> ShellOutcome {
        match self.gate.gate_newline(&self.buffer.text()) {
            NewlineDecision::Block(diagnostic) => ShellOutcome::NewlineBlocked(diagnostic),
            NewlineDecision::Allow => {
                if self.buffer.split_line(self.caret) {
                    self.caret = Caret::new(self.caret.line + 1, 0);
                    self.rescan();
                    ShellOutcome::Changed
                } else {
                    ShellOutcome::Continue
                }
            }
        }
    }

    /// Switches language: installs that language's starting template and
    /// returns the gate to Idle.
    pub fn select_language(&mut self, language: Language) {
        self.buffer = SourceBuffer::from_text(language.starting_template());
        self.caret = self.buffer.end_caret();
        self.gate.set_language(language);
    }

    /// Replaces the whole buffer (the generated-code path). The gate goes
    /// Idle; the replacement is subject to the next scan.
    pub fn load_source(&mut self, source: &str) {
        self.buffer = SourceBuffer::from_text(source);
        self.caret = self.buffer.end_caret();
        self.gate.reset();
    }

    /// Restores the current language's starting template.
    pub fn reset(&mut self) {
        let language = self.gate.language();
        self.select_language(language);
    }

    /// Captures the complete shell state for parity testing.
    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            language: self.gate.language(),
            caret: self.caret,
            buffer_lines: self.buffer.lines().to_vec(),
            status: self.gate.status().clone(),
        }
    }

    fn rescan(&mut self) {
        self.gate.note_change(&self.buffer.text());
    }

    fn move_left(&mut self) -> ShellOutcome {
        if self.caret.column > 0 {
            self.caret.column -= 1;
            ShellOutcome::Changed
        } else {
            ShellOutcome::Continue
        }
    }

    fn move_right(&mut self) -> ShellOutcome {
        if self.caret.column < self.buffer.line_len(self.caret.line) {
            self.caret.column += 1;
            ShellOutcome::Changed
        } else {
            ShellOutcome::Continue
        }
    }

    fn move_up(&mut self) -> ShellOutcome {
        if self.caret.line > 0 {
            self.caret.line -= 1;
            self.caret = self.buffer.clamp(self.caret);
            ShellOutcome::Changed
        } else {
            ShellOutcome::Continue
        }
    }

    fn move_down(&mut self) -> ShellOutcome {
        if self.caret.line + 1 < self.buffer.line_count() {
            self.caret.line += 1;
            self.caret = self.buffer.clamp(self.caret);
            ShellOutcome::Changed
        } else {
            ShellOutcome::Continue
        }
    }
}
