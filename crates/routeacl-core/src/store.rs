//! Rule storage: subject -> verb -> path pattern -> rule.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::pattern::PathPattern;
use crate::subject::ANY_SUBJECT;

/// A registered (subject, verb, pattern) -> accept entry.
#[derive(Debug, Clone)]
pub struct Rule {
    pub subject: String,
    pub verb: String,
    pub pattern: Arc<PathPattern>,
    pub accept: bool,
}

type PatternMap = BTreeMap<String, Rule>;

/// In-memory rule store. Rules are only ever added or overwritten.
#[derive(Debug, Clone)]
pub struct RuleStore {
    buckets: HashMap<String, HashMap<String, PatternMap>>,
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleStore {
    pub fn new() -> Self {
        let mut buckets = HashMap::new();
        buckets.insert(ANY_SUBJECT.to_string(), HashMap::new());
        Self { buckets }
    }

    /// Insert a rule; an identical (subject, verb, pattern) triple is replaced.
    pub fn insert(&mut self, rule: Rule) {
        self.buckets
            .entry(rule.subject.clone())
            .or_default()
            .entry(rule.verb.clone())
            .or_default()
            .insert(rule.pattern.as_str().to_string(), rule);
    }

    /// Candidate rules for a subject and verb, in evaluation order.
    ///
    /// Subject rules shadow `*` rules with the same pattern; the result is
    /// sorted by pattern, descending.
    pub fn candidates(&self, subject: &str, verb: &str) -> Vec<&Rule> {
        let mut merged: BTreeMap<&str, &Rule> = BTreeMap::new();
        for bucket in [ANY_SUBJECT, subject] {
            if let Some(rules) = self.rules_for(bucket, verb) {
                merged.extend(rules.iter().map(|(k, r)| (k.as_str(), r)));
            }
        }
        merged.into_values().rev().collect()
    }

    fn rules_for(&self, subject: &str, verb: &str) -> Option<&PatternMap> {
        self.buckets.get(subject)?.get(verb)
    }

    /// Number of stored (subject, verb, pattern) entries.
    pub fn len(&self) -> usize {
        self.buckets
            .values()
            .flat_map(HashMap::values)
            .map(BTreeMap::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subjects with a bucket, `*` included.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }
}
