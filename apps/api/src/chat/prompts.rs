//! Prompt Composer — turns a message and its classification into the single
//! prompt string sent to the generative model, plus the deterministic reply
//! used when no model backend is configured.

use crate::chat::classifier::MatchResult;

/// Maximum number of matched jobs embedded in a prompt. Fixed.
pub const PROMPT_JOB_PREVIEW: usize = 3;

/// Persona prepended to every prompt by the model client.
pub const SYSTEM_PROMPT: &str = "You are a friendly, realistic career guidance assistant. \
    You help people find careers that fit their interests and education. \
    Keep answers concise and structured, and do not invent salary or job market figures.";

/// Prompt for messages that matched no domain.
const EXPLORATORY_PROMPT_TEMPLATE: &str = r#"A user is looking for career guidance and wrote:
"{message}"

Their message does not clearly point to a specific career field. Do NOT assume a domain.
Ask two or three clarifying questions about their interests, strengths and educational background,
and mention that fields like technology, business, health, writing or design are all possible starting points."#;

/// Prompt for messages that matched one or more domains.
/// Replace: {message}, {domains}, {jobs}
const MATCHED_PROMPT_TEMPLATE: &str = r#"A user is looking for career guidance and wrote:
"{message}"

Matched career domains: {domains}

Relevant career options:
{jobs}

For these options, discuss the growth outlook, the required skills and the typical work style.
Relate them to what the user told you, then end with one follow-up question to narrow down their interests."#;

const NO_MATCH_REPLY: &str = "I couldn't find specific career matches based on your input. \
    Could you please tell me more about your interests and educational background? \
    For example, are you interested in technology, business, arts, or something else?";

pub fn compose_prompt(message: &str, result: &MatchResult<'_>) -> String {
    if result.is_general() {
        return EXPLORATORY_PROMPT_TEMPLATE.replace("{message}", message);
    }

    let domains: Vec<&str> = result.domains.iter().copied().collect();
    let jobs: Vec<String> = result
        .jobs
        .iter()
        .take(PROMPT_JOB_PREVIEW)
        .map(|job| format!("- {}: {}", job.title, job.description))
        .collect();

    // Placeholders are substituted last-to-first so user text containing
    // "{domains}" or "{jobs}" is never expanded.
    MATCHED_PROMPT_TEMPLATE
        .replace("{jobs}", &jobs.join("\n"))
        .replace("{domains}", &domains.join(", "))
        .replace("{message}", message)
}

/// Rule-based reply listing every matched job title, one per line.
pub fn suggestion_text(result: &MatchResult<'_>) -> String {
    if result.jobs.is_empty() {
        return NO_MATCH_REPLY.to_string();
    }

    let titles: Vec<&str> = result.jobs.iter().map(|j| j.title.as_str()).collect();
    format!(
        "Based on your interests and education, here are some career paths that might interest you:\n\n{}\n\nWould you like to know more about any of these careers?",
        titles.join("\n")
    )
}
