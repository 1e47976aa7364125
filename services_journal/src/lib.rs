#![no_std]

//! # Event Journal Service
//!
//! Structured event journal for the Codestop workbench.
//!
//! ## Philosophy
//!
//! Events are explicit and structured, not text-based or printf-style. The
//! journal keeps a bounded history so a host can inspect what the session
//! did without unbounded growth.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Journal entries kept unless configured otherwise.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 256;

/// Event severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Debug information
    Debug,
    /// Informational events
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

/// A structured journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Event severity
    pub level: LogLevel,
    /// Originating component (if known)
    pub source: Option<String>,
    /// Event message
    pub message: String,
    /// Structured fields
    pub fields: Vec<(String, String)>,
}

impl JournalEntry {
    /// Creates a new entry
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            source: None,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Debug, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, message)
    }

    /// Sets the originating component
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a structured field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }
}

/// Bounded, ordered journal of session events
#[derive(Debug, Clone)]
pub struct Journal {
    capacity: usize,
    entries: VecDeque<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_JOURNAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: VecDeque::new(),
        }
    }

    /// Appends an entry, dropping the oldest once the capacity is reached.
    pub fn record(&mut self, entry: JournalEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter()
    }

    /// The most recent `count` entries, oldest first.
    pub fn recent(&self, count: usize) -> Vec<&JournalEntry> {
        let skip = self.entries.len().saturating_sub(count);
        self.entries.iter().skip(skip).collect()
    }

    /// Entries at or above the given severity.
    pub fn at_least(&self, level: LogLevel) -> Vec<&JournalEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.level >= level)
            .collect()
    }

    /// Serializes the full history as JSON.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        let entries: Vec<&JournalEntry> = self.entries.iter().collect();
        serde_json::to_string(&entries)
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}
