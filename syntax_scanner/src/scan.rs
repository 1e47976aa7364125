//! Single-pass well-formedness scan
//!
//! One invocation walks the buffer line by line, character by character,
//! threading a small mutable state value and returning at the first
//! violation. O(buffer length), no allocation beyond the diagnostic.

use scan_types::{Delimiter, Diagnostic, Fault, Language, Verdict};

use crate::rules::{line_is_skipped, TerminatorRules};

/// Open string literal being tracked within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenString {
    quote: char,
    /// 1-based line the literal opened on.
    line: u32,
}

/// Counters and string mode threaded through one scan.
///
/// Invariant: counters never go negative; a closer that would do so is an
/// immediate terminal fault.
#[derive(Debug, Default)]
struct ScanState {
    parens: u32,
    brackets: u32,
    braces: u32,
    string: Option<OpenString>,
}

impl ScanState {
    fn count(&self, delimiter: Delimiter) -> u32 {
        match delimiter {
            Delimiter::Paren => self.parens,
            Delimiter::Bracket => self.brackets,
            Delimiter::Brace => self.braces,
        }
    }

    fn count_mut(&mut self, delimiter: Delimiter) -> &mut u32 {
        match delimiter {
            Delimiter::Paren => &mut self.parens,
            Delimiter::Bracket => &mut self.brackets,
            Delimiter::Brace => &mut self.braces,
        }
    }

    fn open(&mut self, delimiter: Delimiter) {
        *self.count_mut(delimiter) += 1;
    }

    /// Returns false when no opener is available to match the closer.
    fn close(&mut self, delimiter: Delimiter) -> bool {
        let count = self.count_mut(delimiter);
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }
}

/// Scans the full buffer and returns the verdict.
///
/// Pure and total: same input, same verdict, and no input can make it panic.
/// The first violation in top-to-bottom, left-to-right order wins and stops
/// the scan.
pub fn scan(source: &str, language: Language) -> Verdict {
    let rules = TerminatorRules::for_language(language);
    let mut state = ScanState::default();

    for (index, line) in source.lines().enumerate() {
        let line_number = index as u32 + 1;
        let trimmed = line.trim();
        if line_is_skipped(trimmed) {
            continue;
        }

        if let Some(diagnostic) = scan_characters(&mut state, line, line_number) {
            return Verdict::Invalid(diagnostic);
        }

        // Strings are single-line constructs; one left open at the end of a
        // line is terminal and cites the line it opened on.
        if let Some(open) = state.string.take() {
            return Verdict::Invalid(Diagnostic::at_line(open.line, Fault::UnclosedString));
        }

        if let Some(rules) = rules {
            if rules.requires_terminator(trimmed) {
                return Verdict::Invalid(Diagnostic::at_line(line_number, Fault::MissingSemicolon));
            }
        }
    }

    for delimiter in Delimiter::ALL {
        let open = state.count(delimiter);
        if open > 0 {
            return Verdict::Invalid(Diagnostic::whole_buffer(Fault::MissingClosers {
                delimiter,
                count: open,
            }));
        }
    }

    Verdict::Valid
}

/// Walks one line's characters, updating counters and string mode.
fn scan_characters(state: &mut ScanState, line: &str, line_number: u32) -> Option<Diagnostic> {
    let mut previous: Option<char> = None;
    for ch in line.chars() {
        if let Some(open) = state.string {
            // A backslash immediately before the character escapes it;
            // multi-backslash runs are not tracked.
            let escaped = previous == Some('\\');
            if !escaped && ch == open.quote {
                state.string = None;
            }
        } else if ch == '"' || ch == '\'' {
            state.string = Some(OpenString {
                quote: ch,
                line: line_number,
            });
        } else if let Some(delimiter) = Delimiter::from_opener(ch) {
            state.open(delimiter);
        } else if let Some(delimiter) = Delimiter::from_closer(ch) {
            if !state.close(delimiter) {
                return Some(Diagnostic::at_line(
                    line_number,
                    Fault::UnmatchedCloser { delimiter },
                ));
            }
        }
        previous = Some(ch);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagnostic(source: &str, language: Language) -> Diagnostic {
        match scan(source, language) {
            Verdict::Invalid(diagnostic) => diagnostic,
            Verdict::Valid => panic!("expected invalid verdict for {:?}", source),
        }
    }

    #[test]
    fn test_hello_python_valid() {
        assert_eq!(scan("print(\"Hello\")", Language::Python), Verdict::Valid);
    }

    #[test]
    fn test_stream_without_terminator() {
        let found = diagnostic("cout << \"Hi\"", Language::Cpp);
        assert_eq!(found, Diagnostic::at_line(1, Fault::MissingSemicolon));
    }

    #[test]
    fn test_return_without_terminator_cites_its_line() {
        let found = diagnostic("if (x > 0) {\n  return x\n}", Language::Java);
        assert_eq!(found, Diagnostic::at_line(2, Fault::MissingSemicolon));
    }

    #[test]
    fn test_unclosed_call_is_whole_buffer_deficit() {
        for language in Language::ALL {
            let found = diagnostic("foo(bar(1, 2)", language);
            assert_eq!(
                found,
                Diagnostic::whole_buffer(Fault::MissingClosers {
                    delimiter: Delimiter::Paren,
                    count: 1,
                })
            );
        }
    }

    #[test]
    fn test_language_sensitivity_of_terminator() {
        assert_eq!(scan("x = 5", Language::Python), Verdict::Valid);
        assert_eq!(
            diagnostic("x = 5", Language::Java),
            Diagnostic::at_line(1, Fault::MissingSemicolon)
        );
        assert_eq!(
            diagnostic("x = 5", Language::Cpp),
            Diagnostic::at_line(1, Fault::MissingSemicolon)
        );
    }

    #[test]
    fn test_unmatched_closer_stops_the_scan() {
        // The stray `)` on line 1 wins; the unterminated string on line 2 is
        // never reached.
        let found = diagnostic(")\n\"open", Language::Python);
        assert_eq!(
            found,
            Diagnostic::at_line(
                1,
                Fault::UnmatchedCloser {
                    delimiter: Delimiter::Paren,
                }
            )
        );
    }

    #[test]
    fn test_unmatched_bracket_and_brace() {
        assert_eq!(
            diagnostic("]", Language::Python),
            Diagnostic::at_line(
                1,
                Fault::UnmatchedCloser {
                    delimiter: Delimiter::Bracket,
                }
            )
        );
        assert_eq!(
            diagnostic("x = }", Language::Python),
            Diagnostic::at_line(
                1,
                Fault::UnmatchedCloser {
                    delimiter: Delimiter::Brace,
                }
            )
        );
    }

    #[test]
    fn test_unclosed_string_cites_opening_line() {
        let found = diagnostic("a = 1\nb = \"open", Language::Python);
        assert_eq!(found, Diagnostic::at_line(2, Fault::UnclosedString));
    }

    #[test]
    fn test_unclosed_single_quote() {
        let found = diagnostic("name = 'alice", Language::Python);
        assert_eq!(found, Diagnostic::at_line(1, Fault::UnclosedString));
    }

    #[test]
    fn test_escaped_quote_stays_inside_string() {
        assert_eq!(
            scan("s = \"a\\\"b\"", Language::Python),
            Verdict::Valid
        );
    }

    #[test]
    fn test_other_quote_kind_inside_string_ignored() {
        assert_eq!(
            scan("print(\"it's fine\")", Language::Python),
            Verdict::Valid
        );
    }

    #[test]
    fn test_delimiters_inside_string_ignored() {
        assert_eq!(
            scan("s = \"(not [a] {delimiter})\"", Language::Python),
            Verdict::Valid
        );
    }

    #[test]
    fn test_comment_lines_skipped() {
        assert_eq!(scan("# )))", Language::Python), Verdict::Valid);
        assert_eq!(scan("// )))", Language::Cpp), Verdict::Valid);
        assert_eq!(scan("/* )))", Language::Java), Verdict::Valid);
    }

    #[test]
    fn test_blank_lines_skipped() {
        assert_eq!(scan("\n\n   \n", Language::Java), Verdict::Valid);
        assert_eq!(scan("", Language::Java), Verdict::Valid);
    }

    #[test]
    fn test_residual_deficit_report_order() {
        // Both a bracket and a brace stay open; parens are checked first,
        // then brackets.
        let found = diagnostic("x = [\ny = {", Language::Python);
        assert_eq!(
            found,
            Diagnostic::whole_buffer(Fault::MissingClosers {
                delimiter: Delimiter::Bracket,
                count: 1,
            })
        );
    }

    #[test]
    fn test_multiple_missing_closers_counted() {
        let found = diagnostic("f(g(h(", Language::Python);
        assert_eq!(
            found,
            Diagnostic::whole_buffer(Fault::MissingClosers {
                delimiter: Delimiter::Paren,
                count: 3,
            })
        );
    }

    #[test]
    fn test_rescan_is_idempotent() {
        let source = "def f(x):\n    return [x]\n";
        assert_eq!(scan(source, Language::Python), Verdict::Valid);
        assert_eq!(scan(source, Language::Python), Verdict::Valid);
    }

    #[test]
    fn test_starting_templates_are_valid() {
        for language in Language::ALL {
            assert_eq!(
                scan(language.starting_template(), language),
                Verdict::Valid,
                "template for {} must scan clean",
                language
            );
        }
    }

    #[test]
    fn test_terminator_heuristic_skips_comment_lines() {
        assert_eq!(scan("// x = 5", Language::Java), Verdict::Valid);
        assert_eq!(scan("#include <iostream>", Language::Cpp), Verdict::Valid);
    }

    #[test]
    fn test_character_fault_beats_terminator_on_same_line() {
        // The stray closer is found during the character pass, before the
        // terminator heuristic gets to judge the line.
        let found = diagnostic("x = 5)", Language::Java);
        assert_eq!(
            found,
            Diagnostic::at_line(
                1,
                Fault::UnmatchedCloser {
                    delimiter: Delimiter::Paren,
                }
            )
        );
    }
}
