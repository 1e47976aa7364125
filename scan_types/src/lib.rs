#![no_std]

//! # Scan Types
//!
//! This crate defines the shared vocabulary for the Codestop workbench:
//! languages, delimiters, scan faults, diagnostics, and verdicts.
//!
//! ## Philosophy
//!
//! - **Closed enumerations**: Languages and faults are finite variants, not
//!   open-ended strings
//! - **Typed diagnostics**: A diagnostic is a structured value, not a
//!   pre-rendered message
//! - **Serializable**: Every type round-trips through serde for snapshots
//!   and journaling
//! - **Testable**: Rendering and parsing are plain functions with no host
//!   dependencies
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A grammar or token model for any language
//! - A diagnostics framework with severities, ranges, or fix-its
//! - A place for scanning logic (see `syntax_scanner`)

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;
use serde::{Deserialize, Serialize};

/// Source language understood by the workbench.
///
/// Selects the statement-terminator rule set the scanner applies and the
/// starting template installed on a language switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Python,
    Java,
    Cpp,
}

const PYTHON_TEMPLATE: &str = "# Python Code\ndef main():\n    print(\"Hello, World!\")\n\nif __name__ == \"__main__\":\n    main()";

const JAVA_TEMPLATE: &str = "// Java Code\npublic class Main {\n    public static void main(String[] args) {\n        System.out.println(\"Hello, World!\");\n    }\n}";

const CPP_TEMPLATE: &str = "// C++ Code\n#include <iostream>\nusing namespace std;\n\nint main() {\n    cout << \"Hello, World!\" << endl;\n    return 0;\n}";

impl Language {
    /// All supported languages, in selector order.
    pub const ALL: [Language; 3] = [Language::Python, Language::Java, Language::Cpp];

    /// Stable identifier used in configuration and wire formats.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
        }
    }

    /// Human-facing name for selectors and status lines.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C++",
        }
    }

    /// Parses a stable identifier back into a language.
    pub fn parse(value: &str) -> Option<Language> {
        match value {
            "python" => Some(Language::Python),
            "java" => Some(Language::Java),
            "cpp" => Some(Language::Cpp),
            _ => None,
        }
    }

    /// Canned buffer content installed when this language is selected.
    pub fn starting_template(&self) -> &'static str {
        match self {
            Language::Python => PYTHON_TEMPLATE,
            Language::Java => JAVA_TEMPLATE,
            Language::Cpp => CPP_TEMPLATE,
        }
    }

    /// Single-line comment marker for this language.
    pub fn line_comment(&self) -> &'static str {
        match self {
            Language::Python => "#",
            Language::Java | Language::Cpp => "//",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Paired delimiter tracked by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    Paren,
    Bracket,
    Brace,
}

impl Delimiter {
    /// All delimiter kinds, in the order residual deficits are reported.
    pub const ALL: [Delimiter; 3] = [Delimiter::Paren, Delimiter::Bracket, Delimiter::Brace];

    pub fn opener(&self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Bracket => '[',
            Delimiter::Brace => '{',
        }
    }

    pub fn closer(&self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
            Delimiter::Brace => '}',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Delimiter::Paren => "parenthesis",
            Delimiter::Bracket => "bracket",
            Delimiter::Brace => "brace",
        }
    }

    pub fn name_plural(&self) -> &'static str {
        match self {
            Delimiter::Paren => "parentheses",
            Delimiter::Bracket => "brackets",
            Delimiter::Brace => "braces",
        }
    }

    /// Maps an opening character to its delimiter kind.
    pub fn from_opener(ch: char) -> Option<Delimiter> {
        match ch {
            '(' => Some(Delimiter::Paren),
            '[' => Some(Delimiter::Bracket),
            '{' => Some(Delimiter::Brace),
            _ => None,
        }
    }

    /// Maps a closing character to its delimiter kind.
    pub fn from_closer(ch: char) -> Option<Delimiter> {
        match ch {
            ')' => Some(Delimiter::Paren),
            ']' => Some(Delimiter::Bracket),
            '}' => Some(Delimiter::Brace),
            _ => None,
        }
    }
}

/// A single well-formedness violation detected by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fault {
    /// A closer appeared with no matching opener before it.
    UnmatchedCloser { delimiter: Delimiter },
    /// A line ended while still inside a string literal.
    UnclosedString,
    /// The statement-terminator heuristic judged a trailing `;` missing.
    MissingSemicolon,
    /// Openers left unclosed at the end of the buffer.
    MissingClosers { delimiter: Delimiter, count: u32 },
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::UnmatchedCloser { delimiter } => {
                write!(f, "unmatched closing {}", delimiter.name())
            }
            Fault::UnclosedString => write!(f, "unclosed string literal"),
            Fault::MissingSemicolon => write!(f, "missing semicolon"),
            Fault::MissingClosers { delimiter, count } => {
                if *count == 1 {
                    write!(f, "missing 1 closing {}", delimiter.name())
                } else {
                    write!(f, "missing {} closing {}", count, delimiter.name_plural())
                }
            }
        }
    }
}

/// The first violation found by a scan.
///
/// `line` is 1-based and present for every fault except a whole-buffer
/// closer deficit, which has no single point of failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub line: Option<u32>,
    pub fault: Fault,
}

impl Diagnostic {
    /// Diagnostic anchored to a specific 1-based line.
    pub fn at_line(line: u32, fault: Fault) -> Self {
        Self {
            line: Some(line),
            fault,
        }
    }

    /// Diagnostic describing the buffer as a whole.
    pub fn whole_buffer(fault: Fault) -> Self {
        Self { line: None, fault }
    }

    /// Rendered message, including the line prefix when present.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.fault),
            None => write!(f, "{}", self.fault),
        }
    }
}

/// Outcome of one scan over the full buffer.
///
/// Recomputed on every buffer mutation and every Enter key-press, and fully
/// replaced each time; diagnostics never accumulate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Valid,
    Invalid(Diagnostic),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(diagnostic) => Some(diagnostic),
        }
    }
}
