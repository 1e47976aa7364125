//! # Code Generation Service
//!
//! Contract between the workbench and an external text-generation gateway
//! that turns a natural-language prompt into source code, plus a canned
//! offline generator.
//!
//! ## Philosophy
//!
//! - **Ordinary buffer replacement**: Generated text is not trusted; the
//!   editing surface scans it like any other content on the next edit
//! - **Typed failures**: Rate limits and quota exhaustion are explicit
//!   variants with user-facing messages, handled by the host, never by the
//!   gate
//! - **Simulatable**: The generator is a trait; tests and demos run against
//!   the canned implementation
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - An HTTP client or model gateway (a real transport lives in its own
//!   host crate)
//! - Speech capture; prompts arrive already transcribed

use scan_types::Language;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub language: Language,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, language: Language) -> Self {
        Self {
            prompt: prompt.into(),
            language,
        }
    }
}

/// Generation failure, entirely outside the scan/gate domain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodegenError {
    #[error("prompt is empty; speak or type a command first")]
    EmptyPrompt,

    #[error("rate limits exceeded, please try again later")]
    RateLimited,

    #[error("usage quota exhausted, please add credits")]
    QuotaExhausted,

    #[error("generation gateway error: {0}")]
    Gateway(String),
}

/// Code generation capability.
pub trait CodeGenerator {
    fn generate(&mut self, request: &GenerationRequest) -> Result<String, CodegenError>;
}

/// Style guidance folded into the system prompt per language.
pub fn language_instructions(language: Language) -> &'static str {
    match language {
        Language::Python => {
            "Write Python code. Use proper indentation, include necessary imports, \
             and follow PEP 8 style guidelines."
        }
        Language::Java => {
            "Write Java code. Include proper class structure, access modifiers, and \
             semicolons. Use camelCase for methods and variables."
        }
        Language::Cpp => {
            "Write C++ code. Include necessary headers like <iostream>, use proper \
             namespace declarations, and include semicolons."
        }
    }
}

/// Assembles the full system prompt for a request's language.
pub fn system_prompt(language: Language) -> String {
    format!(
        "You are an expert programmer. Generate clean, working, production-ready \
         code based on the user's natural language description.\n\n\
         Language: {}\n{}\n\n\
         Rules:\n\
         1. ONLY output the code - no explanations, no markdown code blocks\n\
         2. The code must be syntactically correct and ready to run\n\
         3. Include helpful inline comments in the code itself\n\
         4. Use best practices for the language\n\
         5. If the request is ambiguous, make reasonable assumptions and write \
         functional code",
        language.as_str().to_uppercase(),
        language_instructions(language)
    )
}

/// The user-role message sent alongside the system prompt.
pub fn user_prompt(request: &GenerationRequest) -> String {
    format!(
        "Write {} code that does the following: {}",
        request.language.as_str(),
        request.prompt.trim()
    )
}

/// Strips markdown code fences a gateway may wrap around generated text.
pub fn strip_code_fences(text: &str) -> String {
    let lines: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect();
    lines.join("\n").trim().to_string()
}

const PYTHON_COUNTING: &str = "# Count to five\nfor i in range(5):\n    print(i)";

const JAVA_COUNTING: &str = "// Count to five\npublic class Main {\n    public static void main(String[] args) {\n        for (int i = 0; i < 5; i++) {\n            System.out.println(i);\n        }\n    }\n}";

const CPP_COUNTING: &str = "// Count to five\n#include <iostream>\nusing namespace std;\n\nint main() {\n    for (int i = 0; i < 5; i++) {\n        cout << i << endl;\n    }\n    return 0;\n}";

/// Offline generator returning canned programs for recognized prompts and
/// the language's starting template otherwise.
#[derive(Debug, Default)]
pub struct CannedGenerator;

impl CannedGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for CannedGenerator {
    fn generate(&mut self, request: &GenerationRequest) -> Result<String, CodegenError> {
        let prompt = request.prompt.trim().to_lowercase();
        if prompt.is_empty() {
            return Err(CodegenError::EmptyPrompt);
        }

        if prompt.contains("count") || prompt.contains("loop") {
            let program = match request.language {
                Language::Python => PYTHON_COUNTING,
                Language::Java => JAVA_COUNTING,
                Language::Cpp => CPP_COUNTING,
            };
            return Ok(program.to_string());
        }

        Ok(request.language.starting_template().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scan_types::Verdict;
    use syntax_scanner::scan;

    #[test]
    fn test_system_prompt_names_the_language() {
        let prompt = system_prompt(Language::Cpp);
        assert!(prompt.contains("Language: CPP"));
        assert!(prompt.contains("<iostream>"));
    }

    #[test]
    fn test_user_prompt_wraps_request() {
        let request = GenerationRequest::new("  sort a list  ", Language::Python);
        assert_eq!(
            user_prompt(&request),
            "Write python code that does the following: sort a list"
        );
    }

    #[test]
    fn test_strip_code_fences() {
        let fenced = "```python\nprint(1)\n```";
        assert_eq!(strip_code_fences(fenced), "print(1)");
    }

    #[test]
    fn test_strip_code_fences_leaves_plain_text() {
        assert_eq!(strip_code_fences("x = 1\ny = 2"), "x = 1\ny = 2");
    }

    #[test]
    fn test_empty_prompt_rejected() {
        let mut generator = CannedGenerator::new();
        let request = GenerationRequest::new("   ", Language::Java);
        assert_eq!(
            generator.generate(&request),
            Err(CodegenError::EmptyPrompt)
        );
    }

    #[test]
    fn test_counting_prompt_generates_loop() {
        let mut generator = CannedGenerator::new();
        let request = GenerationRequest::new("count to five in a loop", Language::Python);
        let code = generator.generate(&request).unwrap();
        assert!(code.contains("range(5)"));
    }

    #[test]
    fn test_unrecognized_prompt_falls_back_to_template() {
        let mut generator = CannedGenerator::new();
        let request = GenerationRequest::new("solve the halting problem", Language::Cpp);
        let code = generator.generate(&request).unwrap();
        assert_eq!(code, Language::Cpp.starting_template());
    }

    #[test]
    fn test_canned_programs_scan_clean() {
        let mut generator = CannedGenerator::new();
        for language in Language::ALL {
            let request = GenerationRequest::new("count to five", language);
            let code = generator.generate(&request).unwrap();
            assert_eq!(
                scan(&code, language),
                Verdict::Valid,
                "canned program for {} must scan clean",
                language
            );
        }
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(
            CodegenError::RateLimited.to_string(),
            "rate limits exceeded, please try again later"
        );
        assert_eq!(
            CodegenError::QuotaExhausted.to_string(),
            "usage quota exhausted, please add credits"
        );
    }
}
