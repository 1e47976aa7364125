#![no_std]

//! # Editor Shell
//!
//! The code-entry surface for the Codestop workbench: a line-addressed
//! source buffer, typed keystrokes, and the editing gate that consults the
//! syntax scanner on every change and vetoes newline insertion while the
//! buffer is malformed.
//!
//! ## Philosophy
//!
//! - **Deterministic**: Same keystroke trace => same shell state
//! - **Gate, not grammar**: The shell blocks one editing action (Enter) on
//!   one diagnostic; it never rewrites the buffer
//! - **Mechanism over policy**: The shell reports outcomes, hosts decide
//!   rendering
//! - **Synchronous**: Every scan completes on the event-handling thread
//!   before control returns; the latest scan always wins
//!
//! ## Design
//!
//! The shell provides:
//! - SourceBuffer: line-based text storage, read-only to the scanner
//! - ScanGate: the Idle/Valid/Error state machine over scan verdicts
//! - ShellCore: keystroke state machine wiring buffer and gate together
//! - ShellSnapshot: deterministic state capture for parity testing

extern crate alloc;

pub mod buffer;
pub mod gate;
pub mod key;
pub mod shell;
pub mod snapshot;

pub use buffer::{Caret, SourceBuffer};
pub use gate::{GateStatus, NewlineDecision, ScanGate};
pub use key::Key;
pub use shell::{ShellCore, ShellOutcome, DEFAULT_TAB_WIDTH};
pub use snapshot::ShellSnapshot;
