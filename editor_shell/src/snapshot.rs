//! Shell snapshot for deterministic parity testing

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::{buffer::Caret, gate::GateStatus};
use scan_types::Language;

/// Complete shell state capture.
///
/// Same keystroke trace, same snapshot; used to compare shell behavior
/// across hosts and refactors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellSnapshot {
    pub language: Language,
    pub caret: Caret,
    pub buffer_lines: Vec<String>,
    pub status: GateStatus,
}

impl ShellSnapshot {
    /// Deterministic hash for fast comparison in parity tests.
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use alloc::format;
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        hasher.update(self.language.as_str().as_bytes());
        hasher.update(self.caret.line.to_le_bytes());
        hasher.update(self.caret.column.to_le_bytes());
        for line in &self.buffer_lines {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }
        hasher.update(format!("{:?}", self.status).as_bytes());

        let digest = hasher.finalize();
        let bytes: [u8; 8] = digest[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Key, ShellCore};
    use alloc::vec;

    #[test]
    fn test_snapshot_captures_state() {
        let mut shell = ShellCore::new(Language::Python);
        shell.load_source("x = 1");
        shell.apply_key(Key::Char(' '));

        let snapshot = shell.snapshot();
        assert_eq!(snapshot.language, Language::Python);
        assert_eq!(snapshot.buffer_lines, vec![String::from("x = 1 ")]);
        assert_eq!(snapshot.status, *shell.status());
    }

    #[test]
    fn test_same_trace_same_hash() {
        let trace = [Key::Char('x'), Key::Char(' '), Key::Char('='), Key::Char(' '), Key::Char('1')];

        let mut first = ShellCore::new(Language::Java);
        let mut second = ShellCore::new(Language::Java);
        first.load_source("");
        second.load_source("");
        for key in trace {
            first.apply_key(key);
            second.apply_key(key);
        }

        assert_eq!(first.snapshot(), second.snapshot());
        assert_eq!(first.snapshot().hash(), second.snapshot().hash());
    }

    #[test]
    fn test_different_state_different_hash() {
        let mut shell = ShellCore::new(Language::Python);
        shell.load_source("");
        let before = shell.snapshot();
        shell.apply_key(Key::Char('a'));
        assert_ne!(before.hash(), shell.snapshot().hash());
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let mut shell = ShellCore::new(Language::Cpp);
        shell.apply_key(Key::Char('x'));
        let snapshot = shell.snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ShellSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
