//! # Workbench
//!
//! Host glue for Codestop: wires the editor shell, status view, journal,
//! execution sandbox, and code generator into one session.
//!
//! ## Philosophy
//!
//! - **The shell decides editing**: The workbench forwards keystrokes and
//!   relays outcomes; it never second-guesses the gate
//! - **Advisory execution**: Running is refused while the gate is in error
//!   or the buffer is blank, but the verdict is advice, not enforcement
//! - **Collaborator failures stay outside the core**: Runner and generator
//!   errors become journal entries and messages; the gate's verdict is
//!   untouched
//!
//! ## Design
//!
//! - WorkbenchConfig: serializable host configuration
//! - Workbench: the session state machine over pluggable backends

pub mod config;
pub mod session;

pub use config::WorkbenchConfig;
pub use session::{SessionError, Workbench};
