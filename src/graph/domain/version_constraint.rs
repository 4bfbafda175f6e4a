/// One clause of a dependency version constraint, e.g. `>=` `1.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintClause {
    raw: String,
}

impl ConstraintClause {
    /// The clause exactly as it appears in the constraint key (`>=:1.0`)
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Comparison operator, when the clause carries one
    pub fn operator(&self) -> Option<&str> {
        self.raw.split_once(':').map(|(op, _)| op)
    }

    /// Version part of the clause (the whole clause if there is no separator)
    pub fn version(&self) -> &str {
        self.raw
            .split_once(':')
            .map(|(_, version)| version)
            .unwrap_or(&self.raw)
    }

    /// Human-readable form: the first `:` becomes a space (`>=:1.0` -> `>= 1.0`)
    pub fn display_text(&self) -> String {
        self.raw.replacen(':', " ", 1)
    }
}

/// Dependency version constraint in the report's key format.
///
/// The key is a comma-separated list of `operator:version` clauses, sorted by
/// the producer (e.g. `<:3.0,>=:2.0`). An empty key means the dependency is
/// unconstrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    clauses: Vec<ConstraintClause>,
}

impl VersionConstraint {
    pub fn parse(key: &str) -> Self {
        if key.is_empty() {
            return Self { clauses: vec![] };
        }

        let clauses = key
            .split(',')
            .map(|raw| ConstraintClause {
                raw: raw.to_string(),
            })
            .collect();

        Self { clauses }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &[ConstraintClause] {
        &self.clauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_is_unconstrained() {
        let constraint = VersionConstraint::parse("");
        assert!(constraint.is_unconstrained());
        assert!(constraint.clauses().is_empty());
    }

    #[test]
    fn test_parse_multiple_clauses() {
        let constraint = VersionConstraint::parse("<:3.0,>=:2.0");
        assert!(!constraint.is_unconstrained());
        assert_eq!(constraint.clauses().len(), 2);

        let first = &constraint.clauses()[0];
        assert_eq!(first.operator(), Some("<"));
        assert_eq!(first.version(), "3.0");
        assert_eq!(first.display_text(), "< 3.0");

        let second = &constraint.clauses()[1];
        assert_eq!(second.operator(), Some(">="));
        assert_eq!(second.display_text(), ">= 2.0");
    }

    #[test]
    fn test_clause_without_separator() {
        let constraint = VersionConstraint::parse("1.2.3");
        let clause = &constraint.clauses()[0];
        assert_eq!(clause.operator(), None);
        assert_eq!(clause.version(), "1.2.3");
        assert_eq!(clause.display_text(), "1.2.3");
    }

    #[test]
    fn test_only_first_separator_replaced() {
        let constraint = VersionConstraint::parse("==:1:2");
        assert_eq!(constraint.clauses()[0].display_text(), "== 1:2");
        assert_eq!(constraint.clauses()[0].raw(), "==:1:2");
    }
}
