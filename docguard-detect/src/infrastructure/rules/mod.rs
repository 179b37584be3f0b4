//! Local pattern rule catalogue

mod default_rules;

pub use default_rules::default_rules;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::value_objects::PatternRule;

/// A pattern rule paired with its compiled regex
pub struct CompiledRule {
    pub rule: PatternRule,
    pub regex: Regex,
}

// Compiled once on first use; read-only afterwards, so concurrent
// detection calls share it without synchronization.
static RULE_TABLE: Lazy<Vec<CompiledRule>> = Lazy::new(|| {
    default_rules()
        .into_iter()
        .filter_map(|rule| match Regex::new(&rule.pattern) {
            Ok(regex) => Some(CompiledRule { rule, regex }),
            Err(e) => {
                tracing::warn!(rule_id = %rule.id, error = %e, "Failed to compile rule pattern");
                None
            }
        })
        .collect()
});

/// The process-wide compiled rule table
pub fn rule_table() -> &'static [CompiledRule] {
    &RULE_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_default_rule_compiles() {
        assert_eq!(rule_table().len(), default_rules().len());
    }

    #[test]
    fn rule_ids_are_unique() {
        let mut ids: Vec<String> = default_rules().into_iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), rule_table().len());
    }
}
