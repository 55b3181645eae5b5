//! Closed vocabularies for conventional commit headers.

/// Allowed commit types, always compared in lowercase.
pub const ALLOWED_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
    "enh",
];

/// Allowed commit scopes, always compared in uppercase.
pub const ALLOWED_SCOPES: &[&str] = &[
    "AL", "ANM", "ASM", "AUTH", "AUTO", "BADGE", "BASE", "BRIDGE", "CAM", "CAR", "CFG", "CHECK",
    "COMMENT", "CP", "CSL", "CTE", "DMD", "DOC", "DP", "DS", "DU", "ELE", "ES", "EXDS", "EXP",
    "FAFSA", "FEED", "FNL", "FORM", "GEO", "GOAL", "GOL", "GUARD", "I18N", "ILP", "IPDB", "IPPM",
    "IS", "K12ADMIN", "KRI", "LNP", "MEET", "MEMBER", "MNGMT", "MSG", "NCAA", "NOTE", "NOTIF",
    "ONB", "OPPS", "ORGPROF", "PROF", "QNA", "RC", "RDC", "RES", "RLBS", "RLP", "RONTAG", "ROS",
    "SCG", "SCHOL", "SCORE", "SDH", "SET", "SIS", "SS", "STATS", "STDH", "SYE", "TAG", "TODO", "UI",
    "VR",
];

/// Returns whether `value` is an allowed commit type.
pub fn is_allowed_type(value: &str) -> bool {
    ALLOWED_TYPES.contains(&value)
}

/// Returns whether `value` is an allowed commit scope.
pub fn is_allowed_scope(value: &str) -> bool {
    ALLOWED_SCOPES.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_are_lowercase() {
        assert!(ALLOWED_TYPES.iter().all(|t| t.to_lowercase() == *t));
    }

    #[test]
    fn scopes_are_uppercase() {
        assert!(ALLOWED_SCOPES.iter().all(|s| s.to_uppercase() == *s));
    }

    #[test]
    fn membership_is_case_sensitive() {
        assert!(is_allowed_type("feat"));
        assert!(!is_allowed_type("FEAT"));
        assert!(is_allowed_scope("K12ADMIN"));
        assert!(!is_allowed_scope("cp"));
    }
}
