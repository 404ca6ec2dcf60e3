//! Shared string helpers.

/// Python keywords, which cannot name a class.
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Convert a string to PascalCase (e.g., "dancing_blue-owl" -> "DancingBlueOwl")
///
/// Parts already capitalized keep their inner casing.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', ' '])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Check whether `s` is an ASCII identifier that is not a Python keyword.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !PYTHON_KEYWORDS.contains(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("owl"), "Owl");
        assert_eq!(to_pascal_case("dancing_blue_owl"), "DancingBlueOwl");
        assert_eq!(to_pascal_case("dancing-blue-owl"), "DancingBlueOwl");
        assert_eq!(to_pascal_case("DancingBlueOwl"), "DancingBlueOwl");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("DancingBlueOwl"));
        assert!(is_identifier("_private2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("blue owl"));
        assert!(!is_identifier("class"));
        assert!(!is_identifier("None"));
    }
}
