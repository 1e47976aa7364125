#![no_std]

//! # Status Presentation Service
//!
//! View models for the workbench's validation feedback: the status
//! indicator next to the language selector and the dismissable error
//! banner beneath the editor.
//!
//! ## Philosophy
//!
//! - **Views, not rendering**: This crate produces structured view state;
//!   hosts decide pixels
//! - **Gate-driven**: The view is replaced on every scan, mirroring the
//!   gate's single current verdict
//! - **Testable**: Banner lifecycle and labels are asserted directly
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A widget toolkit or terminal renderer
//! - A notification center (see `services_journal` for history)

extern crate alloc;

use alloc::string::{String, ToString};
use editor_shell::GateStatus;
use serde::{Deserialize, Serialize};

/// Title shown on every error banner.
pub const BANNER_TITLE: &str = "Syntax Error Detected";

/// Tri-state indicator mirroring the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorState {
    Idle,
    Valid,
    Error,
}

impl IndicatorState {
    /// Label rendered next to the indicator dot.
    pub fn label(&self) -> &'static str {
        match self {
            IndicatorState::Idle => "Ready",
            IndicatorState::Valid => "Syntax Valid",
            IndicatorState::Error => "Syntax Error",
        }
    }
}

/// Error banner surfaced beneath the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBanner {
    pub title: String,
    pub message: String,
}

impl ErrorBanner {
    fn new(message: String) -> Self {
        Self {
            title: BANNER_TITLE.to_string(),
            message,
        }
    }
}

/// Validation view state, replaced on every scan.
///
/// Dismissing the banner hides it until the next error transition; a new
/// error always re-shows it, and a valid or idle transition clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusView {
    indicator: IndicatorState,
    message: Option<String>,
    banner: Option<ErrorBanner>,
}

impl StatusView {
    pub fn new() -> Self {
        Self {
            indicator: IndicatorState::Idle,
            message: None,
            banner: None,
        }
    }

    pub fn indicator(&self) -> IndicatorState {
        self.indicator
    }

    /// Status-line message; the rendered diagnostic while in error.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn banner(&self) -> Option<&ErrorBanner> {
        self.banner.as_ref()
    }

    /// Consumes the gate status after a scan and replaces the view.
    pub fn apply(&mut self, status: &GateStatus) {
        match status {
            GateStatus::Idle => {
                self.indicator = IndicatorState::Idle;
                self.message = None;
                self.banner = None;
            }
            GateStatus::Valid => {
                self.indicator = IndicatorState::Valid;
                self.message = None;
                self.banner = None;
            }
            GateStatus::Error(diagnostic) => {
                let message = diagnostic.message();
                self.indicator = IndicatorState::Error;
                self.message = Some(message.clone());
                self.banner = Some(ErrorBanner::new(message));
            }
        }
    }

    /// Hides the banner; the indicator and message stay put.
    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }
}

impl Default for StatusView {
    fn default() -> Self {
        Self::new()
    }
}
