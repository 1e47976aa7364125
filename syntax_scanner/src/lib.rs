#![no_std]

//! # Syntax Scanner
//!
//! Lightweight well-formedness scanner for the Codestop workbench. Runs over
//! the full buffer on every keystroke and decides whether editing may
//! continue.
//!
//! ## Philosophy
//!
//! - **Pure**: `scan` is a deterministic function of buffer and language
//! - **Total**: every input yields a verdict; nothing panics
//! - **First error wins**: scanning stops at the first violation, top to
//!   bottom, left to right
//! - **Best-effort**: delimiter, string, and statement-terminator heuristics
//!   only; approximation is accepted behavior
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A compiler front end or tokenizer
//! - An AST builder
//! - A complete grammar checker for any language
//! - A multi-line block-comment or triple-quote tracker

extern crate alloc;

pub mod rules;
pub mod scan;

pub use rules::TerminatorRules;
pub use scan::scan;
