//! Per-language statement-terminator rule tables
//!
//! Python carries no table; Java and C++ share the fixed marker set but own
//! separate entries, so adding a language is one `Language` variant plus one
//! table row.

use scan_types::Language;

/// Line prefixes treated as comments by the scan; such lines are skipped
/// entirely, including multi-line block-comment openers.
const COMMENT_PREFIXES: [&str; 3] = ["//", "#", "/*"];

/// Returns true if the trimmed line is exempt from all checks.
pub fn line_is_skipped(trimmed: &str) -> bool {
    trimmed.is_empty() || COMMENT_PREFIXES.iter().any(|prefix| trimmed.starts_with(prefix))
}

/// Statement-terminator rule table for one language.
#[derive(Debug)]
pub struct TerminatorRules {
    /// Substrings that mark a line as statement-like.
    markers: &'static [&'static str],
    /// Keywords whose header lines ending in `)` are exempt.
    control_keywords: &'static [&'static str],
}

static JAVA_RULES: TerminatorRules = TerminatorRules {
    markers: &["cout", "cin", "System.out", "return"],
    control_keywords: &["if", "for", "while"],
};

static CPP_RULES: TerminatorRules = TerminatorRules {
    markers: &["cout", "cin", "System.out", "return"],
    control_keywords: &["if", "for", "while"],
};

impl TerminatorRules {
    /// Rule table for a language; `None` means the language uses no
    /// statement terminator.
    pub fn for_language(language: Language) -> Option<&'static TerminatorRules> {
        match language {
            Language::Python => None,
            Language::Java => Some(&JAVA_RULES),
            Language::Cpp => Some(&CPP_RULES),
        }
    }

    /// Judges whether the trimmed line requires a trailing `;` it does not
    /// have. Intentionally approximate: macro bodies, multi-line statements,
    /// and lambdas may be misjudged.
    pub fn requires_terminator(&self, trimmed: &str) -> bool {
        if trimmed.is_empty() {
            return false;
        }
        if trimmed.ends_with('{')
            || trimmed.ends_with('}')
            || trimmed.ends_with(':')
            || trimmed.ends_with(';')
        {
            return false;
        }
        if self.is_exempt(trimmed) {
            return false;
        }
        self.has_statement_marker(trimmed)
    }

    fn has_statement_marker(&self, trimmed: &str) -> bool {
        self.markers.iter().any(|marker| trimmed.contains(marker))
            || trimmed.contains('=')
            || has_balanced_call(trimmed)
    }

    fn is_exempt(&self, trimmed: &str) -> bool {
        if trimmed.starts_with('#') {
            return true;
        }
        if trimmed.starts_with("else") {
            return true;
        }
        if trimmed.starts_with("class ") || trimmed.starts_with("public class ") {
            return true;
        }
        if trimmed.ends_with(')')
            && self
                .control_keywords
                .iter()
                .any(|keyword| starts_with_keyword(trimmed, keyword))
        {
            return true;
        }
        false
    }
}

/// True if the line opens with `keyword` at a token boundary, so `iffy`
/// does not match `if`.
fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    match line.strip_prefix(keyword) {
        Some(rest) => rest.starts_with(' ') || rest.starts_with('('),
        None => false,
    }
}

/// True if the line contains a line-locally balanced `(...)` pattern: equal
/// non-zero opener and closer counts with the first `(` before the last `)`.
fn has_balanced_call(trimmed: &str) -> bool {
    let opens = trimmed.matches('(').count();
    let closes = trimmed.matches(')').count();
    opens > 0 && opens == closes && trimmed.find('(') < trimmed.rfind(')')
}
