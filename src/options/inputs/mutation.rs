//! Inputs controlling what gets mutated and how hard.

use regex::Regex;

use crate::options::error::OptionsError;
use crate::options::inputs::keyword::match_keyword;
use crate::options::values::{FilePattern, MutationLevel, MutationOperator};

const MUTATION_LEVEL_KEYWORDS: &[(&str, MutationLevel)] = &[
    ("basic", MutationLevel::Basic),
    ("standard", MutationLevel::Standard),
    ("aggressive", MutationLevel::Aggressive),
    ("complete", MutationLevel::Complete),
];

const OPERATOR_KEYWORDS: &[(&str, MutationOperator)] = &[
    ("arithmetic", MutationOperator::Arithmetic),
    ("comparison", MutationOperator::Comparison),
    ("boolean", MutationOperator::Boolean),
    ("assignment", MutationOperator::Assignment),
    ("string-literal", MutationOperator::StringLiteral),
    ("unary", MutationOperator::Unary),
];

/// How many mutation operators the run applies.
pub struct MutationLevelInput;

impl MutationLevelInput {
    /// Canonical field name.
    pub const NAME: &'static str = "mutation-level";
    /// Help text shown for the field.
    pub const HELP: &'static str = "Specifies which mutations are placed in the project. \
        One of: basic, standard, aggressive, complete. Default: standard.";
    /// Level applied when no raw value is given.
    pub const DEFAULT: MutationLevel = MutationLevel::Standard;

    /// Resolve the mutation level keyword.
    pub fn resolve(raw: Option<&str>) -> Result<MutationLevel, OptionsError> {
        match raw {
            None => Ok(Self::DEFAULT),
            Some(value) => match_keyword(Self::NAME, value, MUTATION_LEVEL_KEYWORDS),
        }
    }
}

/// File patterns selecting the sources to mutate.
pub struct MutateInput;

impl MutateInput {
    /// Canonical field name.
    pub const NAME: &'static str = "mutate";
    /// Help text shown for the field.
    pub const HELP: &'static str = "Glob patterns selecting files to mutate. Prefix a pattern \
        with '!' to exclude its matches. Default: **/*.rs";
    /// Pattern applied when no raw value is given.
    pub const DEFAULT: &'static str = "**/*.rs";

    /// Parse the mutate patterns, defaulting to every Rust source file.
    pub fn resolve(raw: Option<Vec<String>>) -> Result<Vec<FilePattern>, OptionsError> {
        let patterns = match raw {
            None => vec![Self::DEFAULT.to_string()],
            Some(patterns) => patterns,
        };
        patterns
            .iter()
            .map(|pattern| parse_file_pattern(Self::NAME, pattern))
            .collect()
    }
}

/// File patterns excluded from diff-based mutant selection.
pub struct DiffIgnorePatternsInput;

impl DiffIgnorePatternsInput {
    /// Canonical field name.
    pub const NAME: &'static str = "diff-ignore-patterns";
    /// Help text shown for the field.
    pub const HELP: &'static str = "Glob patterns for files whose changes never trigger a full \
        re-run when the diff feature is enabled. Default: none.";

    /// Parse the ignore patterns; absent means none.
    pub fn resolve(raw: Option<Vec<String>>) -> Result<Vec<FilePattern>, OptionsError> {
        raw.unwrap_or_default()
            .iter()
            .map(|pattern| parse_file_pattern(Self::NAME, pattern))
            .collect()
    }
}

/// Function-name wildcards whose bodies are never mutated.
pub struct IgnoredFunctionsInput;

impl IgnoredFunctionsInput {
    /// Canonical field name.
    pub const NAME: &'static str = "ignored-functions";
    /// Help text shown for the field.
    pub const HELP: &'static str = "Function name patterns whose bodies are skipped during \
        mutation. '*' matches any run of characters; everything else is literal. Default: none.";

    /// Compile each wildcard into an anchored regex.
    pub fn resolve(raw: Option<Vec<String>>) -> Result<Vec<Regex>, OptionsError> {
        raw.unwrap_or_default()
            .iter()
            .map(|pattern| compile_wildcard(Self::NAME, pattern))
            .collect()
    }
}

/// Mutation operator families excluded from the run.
pub struct ExcludedOperatorsInput;

impl ExcludedOperatorsInput {
    /// Canonical field name.
    pub const NAME: &'static str = "excluded-operators";
    /// Help text shown for the field.
    pub const HELP: &'static str = "Mutation operator families to leave out. Any of: arithmetic, \
        comparison, boolean, assignment, string-literal, unary. Default: none.";

    /// Resolve the excluded operator keywords, dropping duplicates.
    pub fn resolve(raw: Option<Vec<String>>) -> Result<Vec<MutationOperator>, OptionsError> {
        let mut operators = Vec::new();
        for token in raw.unwrap_or_default() {
            let operator = match_keyword(Self::NAME, &token, OPERATOR_KEYWORDS)?;
            if !operators.contains(&operator) {
                operators.push(operator);
            }
        }
        Ok(operators)
    }
}

fn parse_file_pattern(field: &'static str, raw: &str) -> Result<FilePattern, OptionsError> {
    let trimmed = raw.trim();
    let (glob, exclude) = match trimmed.strip_prefix('!') {
        Some(rest) => (rest, true),
        None => (trimmed, false),
    };
    if glob.is_empty() {
        return Err(OptionsError::invalid(field, raw, "pattern must not be empty"));
    }
    Ok(FilePattern {
        glob: glob.to_string(),
        exclude,
    })
}

/// `*` becomes `.*`, every other character is matched literally, and the
/// whole pattern is anchored so `log*` cannot match `dialog`.
fn compile_wildcard(field: &'static str, pattern: &str) -> Result<Regex, OptionsError> {
    if pattern.trim().is_empty() {
        return Err(OptionsError::invalid(field, pattern, "pattern must not be empty"));
    }
    let mut source = String::from("^");
    for (index, segment) in pattern.split('*').enumerate() {
        if index > 0 {
            source.push_str(".*");
        }
        source.push_str(&regex::escape(segment));
    }
    source.push('$');
    Regex::new(&source)
        .map_err(|err| OptionsError::invalid(field, pattern, err.to_string()))
}
