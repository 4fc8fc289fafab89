//! Domain Knowledge Base — the immutable career table the classifier reads.
//!
//! Built once at startup and shared as `Arc<KnowledgeBase>`. Keywords are
//! lowercased on construction so matching only has to normalize the message.

mod builtin;

use serde::Serialize;
use thiserror::Error;

/// Field name reported when no domain matches. Reserved; no domain may use it.
pub const GENERAL_FIELD: &str = "General";

#[derive(Debug, Error, PartialEq)]
pub enum KnowledgeError {
    #[error("duplicate career domain: {0}")]
    DuplicateField(String),

    #[error("'General' is reserved for unmatched messages")]
    ReservedField,
}

/// A single career suggestion owned by a domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobDescriptor {
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub growth_outlook: String,
    pub work_style: String,
}

impl JobDescriptor {
    pub fn new(
        title: &str,
        description: &str,
        required_skills: &[&str],
        growth_outlook: &str,
        work_style: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
            growth_outlook: growth_outlook.to_string(),
            work_style: work_style.to_string(),
        }
    }
}

/// A named cluster of careers sharing subject-matter keywords.
#[derive(Debug, Clone, PartialEq)]
pub struct CareerDomain {
    pub field: String,
    /// Interest keywords, lowercase.
    pub tags: Vec<String>,
    /// Education keywords, lowercase.
    pub education: Vec<String>,
    pub jobs: Vec<JobDescriptor>,
}

impl CareerDomain {
    pub fn new(field: &str, tags: &[&str], education: &[&str], jobs: Vec<JobDescriptor>) -> Self {
        Self {
            field: field.to_string(),
            tags: normalize_keywords(tags),
            education: normalize_keywords(education),
            jobs,
        }
    }

    /// True when any tag or education keyword occurs in `normalized`,
    /// which must already be lowercase.
    pub fn matches(&self, normalized: &str) -> bool {
        self.tags.iter().any(|k| normalized.contains(k.as_str()))
            || self.education.iter().any(|k| normalized.contains(k.as_str()))
    }
}

fn normalize_keywords(keywords: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let keyword = keyword.trim().to_lowercase();
        // An empty keyword would match every message.
        if !keyword.is_empty() && !out.contains(&keyword) {
            out.push(keyword);
        }
    }
    out
}

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    domains: Vec<CareerDomain>,
}

impl KnowledgeBase {
    /// Validates field-name uniqueness and keeps the declared domain order.
    pub fn new(domains: Vec<CareerDomain>) -> Result<Self, KnowledgeError> {
        for (i, domain) in domains.iter().enumerate() {
            if domain.field.eq_ignore_ascii_case(GENERAL_FIELD) {
                return Err(KnowledgeError::ReservedField);
            }
            if domains[..i].iter().any(|d| d.field == domain.field) {
                return Err(KnowledgeError::DuplicateField(domain.field.clone()));
            }
        }
        Ok(Self { domains })
    }

    /// The static career table shipped with the service.
    pub fn builtin() -> Result<Self, KnowledgeError> {
        Self::new(builtin::domains())
    }

    pub fn domains(&self) -> &[CareerDomain] {
        &self.domains
    }

    pub fn domain(&self, field: &str) -> Option<&CareerDomain> {
        self.domains.iter().find(|d| d.field == field)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
