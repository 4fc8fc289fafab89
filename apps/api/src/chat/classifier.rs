//! Classifier — deterministic substring matching of a message against the
//! knowledge base.
//!
//! Algorithm:
//! 1. Lowercase the message once.
//! 2. For each domain, in knowledge-base order: if any tag or education
//!    keyword occurs in the message, record the field name and append the
//!    domain's jobs in declared order.
//! 3. Apply the `JobDedup` policy across domains.
//! 4. No match at all → `{domains: {"General"}, jobs: []}`.

use std::collections::{BTreeSet, HashSet};

use crate::knowledge::{JobDescriptor, KnowledgeBase, GENERAL_FIELD};

/// How jobs that appear in more than one matching domain are reported.
///
/// A domain is visited once per classification, so a domain matching on both
/// a tag and an education keyword never contributes its jobs twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JobDedup {
    /// Every matching domain contributes its full job list.
    #[default]
    KeepAll,
    /// The first job with a given title wins; later ones are dropped.
    ByTitle,
}

/// Outcome of classifying one message. Borrows from the knowledge base.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'kb> {
    pub domains: BTreeSet<&'kb str>,
    pub jobs: Vec<&'kb JobDescriptor>,
}

impl<'kb> MatchResult<'kb> {
    /// The canonical "nothing matched" result.
    pub fn general() -> Self {
        Self {
            domains: BTreeSet::from([GENERAL_FIELD]),
            jobs: Vec::new(),
        }
    }

    pub fn is_general(&self) -> bool {
        self.domains.len() == 1 && self.domains.contains(GENERAL_FIELD)
    }
}

pub fn classify<'kb>(kb: &'kb KnowledgeBase, message: &str, policy: JobDedup) -> MatchResult<'kb> {
    let normalized = message.to_lowercase();

    let mut domains = BTreeSet::new();
    let mut jobs: Vec<&'kb JobDescriptor> = Vec::new();
    let mut seen_titles: HashSet<&'kb str> = HashSet::new();

    for domain in kb.domains().iter().filter(|d| d.matches(&normalized)) {
        domains.insert(domain.field.as_str());
        for job in &domain.jobs {
            match policy {
                JobDedup::KeepAll => jobs.push(job),
                JobDedup::ByTitle => {
                    if seen_titles.insert(job.title.as_str()) {
                        jobs.push(job);
                    }
                }
            }
        }
    }

    if domains.is_empty() {
        return MatchResult::general();
    }

    MatchResult { domains, jobs }
}
