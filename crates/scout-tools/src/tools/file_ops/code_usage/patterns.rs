//! Per-language classification rules
//!
//! Each language family owns an ordered list of templates. A template is a
//! regular expression with a `{term}` placeholder that is replaced by the
//! escaped search term. The first template of every family recognizes a
//! declaration, the rest recognize usages.

use super::types::MatchKind;
use regex::Regex;
use scout_core::tools::base::ToolError;
use std::collections::HashMap;

const TERM: &str = "{term}";

const CALL: &str = r"\b{term}\s*\(";
const BARE: &str = r"\b{term}\s*[=;,\)\]\}]";
const DOT_MEMBER: &str = r"\.{term}\b";
const COLON: &str = r"\b{term}\s*:";

const SCRIPT_DECL: &str =
    r"(?:function\s+|const\s+|let\s+|var\s+|class\s+|interface\s+|type\s+|enum\s+)\s*{term}\b";

const SCRIPT: &[(MatchKind, &str)] = &[
    (MatchKind::Declaration, SCRIPT_DECL),
    (MatchKind::Usage, CALL),
    (MatchKind::Usage, BARE),
    (MatchKind::Usage, DOT_MEMBER),
    (MatchKind::Usage, COLON),
];

const MARKUP: &[(MatchKind, &str)] = &[
    (MatchKind::Declaration, SCRIPT_DECL),
    (MatchKind::Usage, CALL),
    (MatchKind::Usage, BARE),
    (MatchKind::Usage, DOT_MEMBER),
    (MatchKind::Usage, COLON),
    (MatchKind::Usage, r"<{term}\b"),
];

const PYTHON: &[(MatchKind, &str)] = &[
    (
        MatchKind::Declaration,
        r"(?:def\s+|class\s+|import\s+.*\s+as\s+|from\s+.*\s+import\s+.*\s+as\s+)\s*{term}\b",
    ),
    (MatchKind::Usage, CALL),
    (MatchKind::Usage, BARE),
    (MatchKind::Usage, DOT_MEMBER),
    (MatchKind::Usage, COLON),
];

const PHP: &[(MatchKind, &str)] = &[
    (
        MatchKind::Declaration,
        r"(?:function\s+|class\s+|interface\s+|trait\s+|const\s+)\s*{term}\b",
    ),
    (MatchKind::Usage, CALL),
    (MatchKind::Usage, BARE),
    (MatchKind::Usage, r"(?:->|::){term}\b"),
    (MatchKind::Usage, r"\${term}\b"),
];

const JAVA: &[(MatchKind, &str)] = &[
    (
        MatchKind::Declaration,
        r"(?:public\s+|private\s+|protected\s+)?(?:static\s+)?(?:final\s+)?(?:class\s+|interface\s+|enum\s+|record\s+)\s*{term}\b",
    ),
    (MatchKind::Usage, CALL),
    (MatchKind::Usage, BARE),
    (MatchKind::Usage, DOT_MEMBER),
];

const GO: &[(MatchKind, &str)] = &[
    (
        MatchKind::Declaration,
        r"(?:func\s+|type\s+|var\s+|const\s+|package\s+)\s*{term}\b",
    ),
    (MatchKind::Usage, CALL),
    (MatchKind::Usage, BARE),
    (MatchKind::Usage, DOT_MEMBER),
];

const C: &[(MatchKind, &str)] = &[
    (
        MatchKind::Declaration,
        r"(?:int\s+|char\s+|float\s+|double\s+|void\s+|struct\s+|typedef\s+|enum\s+)\s*{term}\b",
    ),
    (MatchKind::Usage, CALL),
    (MatchKind::Usage, BARE),
    (MatchKind::Usage, r"(?:\.|->){term}\b"),
];

const CPP: &[(MatchKind, &str)] = &[
    (
        MatchKind::Declaration,
        r"(?:int\s+|char\s+|float\s+|double\s+|void\s+|class\s+|struct\s+|typedef\s+|enum\s+|template\s+)\s*{term}\b",
    ),
    (MatchKind::Usage, CALL),
    (MatchKind::Usage, BARE),
    (MatchKind::Usage, r"(?:\.|->){term}\b"),
    (MatchKind::Usage, r"::{term}\b"),
];

const CSHARP: &[(MatchKind, &str)] = &[
    (
        MatchKind::Declaration,
        r"(?:public\s+|private\s+|protected\s+|internal\s+)?(?:static\s+)?(?:class\s+|interface\s+|enum\s+|struct\s+|delegate\s+)\s*{term}\b",
    ),
    (MatchKind::Usage, CALL),
    (MatchKind::Usage, BARE),
    (MatchKind::Usage, DOT_MEMBER),
];

/// Language family sharing one template set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageFamily {
    /// JavaScript and TypeScript, also the fallback for unknown extensions
    Script,
    /// JSX and TSX, which add component tag usage
    Markup,
    Python,
    Php,
    Java,
    Go,
    C,
    Cpp,
    CSharp,
}

impl LanguageFamily {
    pub const ALL: [LanguageFamily; 9] = [
        Self::Script,
        Self::Markup,
        Self::Python,
        Self::Php,
        Self::Java,
        Self::Go,
        Self::C,
        Self::Cpp,
        Self::CSharp,
    ];

    /// Family for a lower-cased extension with its leading dot
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            ".js" | ".mjs" | ".cjs" | ".ts" => Self::Script,
            ".jsx" | ".tsx" => Self::Markup,
            ".py" => Self::Python,
            ".php" => Self::Php,
            ".java" => Self::Java,
            ".go" => Self::Go,
            ".c" | ".h" => Self::C,
            ".cpp" | ".cc" | ".cxx" | ".hpp" | ".hh" => Self::Cpp,
            ".cs" => Self::CSharp,
            _ => Self::Script,
        }
    }

    fn templates(&self) -> &'static [(MatchKind, &'static str)] {
        match self {
            Self::Script => SCRIPT,
            Self::Markup => MARKUP,
            Self::Python => PYTHON,
            Self::Php => PHP,
            Self::Java => JAVA,
            Self::Go => GO,
            Self::C => C,
            Self::Cpp => CPP,
            Self::CSharp => CSHARP,
        }
    }
}

/// A compiled template tagged with the classification it yields
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub kind: MatchKind,
    pub regex: Regex,
}

/// Compiled rules for every family, built once per search term
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    term: String,
    rules: HashMap<LanguageFamily, Vec<PatternRule>>,
}

impl PatternRegistry {
    /// Escape `term` and compile every family's templates around it
    pub fn new(term: &str) -> Result<Self, ToolError> {
        let escaped = regex::escape(term);
        let mut rules = HashMap::with_capacity(LanguageFamily::ALL.len());

        for family in LanguageFamily::ALL {
            let compiled = family
                .templates()
                .iter()
                .map(|(kind, template)| {
                    let pattern = template.replace(TERM, &escaped);
                    Regex::new(&pattern)
                        .map(|regex| PatternRule { kind: *kind, regex })
                        .map_err(|e| {
                            ToolError::InvalidArguments(format!(
                                "Cannot build search pattern for '{}': {}",
                                term, e
                            ))
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rules.insert(family, compiled);
        }

        Ok(Self {
            term: term.to_string(),
            rules,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Ordered rules for a file extension, falling back to the script family
    pub fn rules_for(&self, extension: &str) -> &[PatternRule] {
        self.rules_for_family(LanguageFamily::from_extension(extension))
    }

    pub fn rules_for_family(&self, family: LanguageFamily) -> &[PatternRule] {
        self.rules
            .get(&family)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_matching(registry: &PatternRegistry, ext: &str, line: &str) -> Vec<MatchKind> {
        registry
            .rules_for(ext)
            .iter()
            .filter(|rule| rule.regex.is_match(line))
            .map(|rule| rule.kind)
            .collect()
    }

    #[test]
    fn test_every_family_starts_with_a_declaration() {
        let registry = PatternRegistry::new("thing").unwrap();
        for family in LanguageFamily::ALL {
            let rules = registry.rules_for_family(family);
            assert!(rules.len() >= 4, "{:?} has too few rules", family);
            assert_eq!(rules[0].kind, MatchKind::Declaration);
            assert!(rules[1..].iter().all(|r| r.kind == MatchKind::Usage));
        }
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(LanguageFamily::from_extension(".ts"), LanguageFamily::Script);
        assert_eq!(LanguageFamily::from_extension(".TSX"), LanguageFamily::Markup);
        assert_eq!(LanguageFamily::from_extension(".py"), LanguageFamily::Python);
        assert_eq!(LanguageFamily::from_extension(".h"), LanguageFamily::C);
        assert_eq!(LanguageFamily::from_extension(".hpp"), LanguageFamily::Cpp);
        assert_eq!(LanguageFamily::from_extension(".cs"), LanguageFamily::CSharp);
        assert_eq!(LanguageFamily::from_extension(".rb"), LanguageFamily::Script);
    }

    #[test]
    fn test_script_declaration_and_call() {
        let registry = PatternRegistry::new("getUserById").unwrap();
        assert_eq!(
            kinds_matching(&registry, ".js", "function getUserById(id) {"),
            vec![MatchKind::Declaration, MatchKind::Usage]
        );
        assert_eq!(
            kinds_matching(&registry, ".js", "const user = getUserById(42);"),
            vec![MatchKind::Usage]
        );
    }

    #[test]
    fn test_markup_tag_only_for_jsx_family() {
        let registry = PatternRegistry::new("Button").unwrap();
        assert_eq!(
            kinds_matching(&registry, ".tsx", "return <Button label=\"ok\" />"),
            vec![MatchKind::Usage]
        );
        assert!(kinds_matching(&registry, ".ts", "return <Button label=\"ok\" />").is_empty());
    }

    #[test]
    fn test_python_alias_import_is_declaration() {
        let registry = PatternRegistry::new("np").unwrap();
        assert_eq!(
            kinds_matching(&registry, ".py", "import numpy as np"),
            vec![MatchKind::Declaration]
        );
    }

    #[test]
    fn test_php_variable_and_arrow_access() {
        let registry = PatternRegistry::new("total").unwrap();
        assert_eq!(
            kinds_matching(&registry, ".php", "echo $total"),
            vec![MatchKind::Usage]
        );
        assert_eq!(
            kinds_matching(&registry, ".php", "return $this->total"),
            vec![MatchKind::Usage]
        );
    }

    #[test]
    fn test_cpp_scope_resolution() {
        let registry = PatternRegistry::new("size").unwrap();
        let rules = registry.rules_for(".cpp");
        assert!(rules.iter().any(|r| r.regex.is_match("std::size")));
        assert!(!registry.rules_for(".go").iter().any(|r| r.regex.is_match("std::size")));
    }

    #[test]
    fn test_term_is_escaped() {
        let registry = PatternRegistry::new("foo.bar(").unwrap();
        assert!(!kinds_matching(&registry, ".js", "foo.bar();").is_empty());
        assert!(kinds_matching(&registry, ".js", "fooXbar();").is_empty());
        assert_eq!(registry.term(), "foo.bar(");
    }
}
