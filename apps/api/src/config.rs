use anyhow::{bail, Context, Result};

use crate::chat::classifier::JobDedup;

const DEFAULT_HF_API_URL: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.2";

/// Application configuration loaded from environment variables.
/// Only the port and log level have hard defaults; the generative backend is
/// enabled when `HF_API_TOKEN` is present.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub hf_api_token: Option<String>,
    pub hf_api_url: String,
    pub hf_max_new_tokens: u32,
    pub job_dedup: JobDedup,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            hf_api_token: optional_env("HF_API_TOKEN"),
            hf_api_url: optional_env("HF_API_URL").unwrap_or_else(|| DEFAULT_HF_API_URL.to_string()),
            hf_max_new_tokens: std::env::var("HF_MAX_NEW_TOKENS")
                .unwrap_or_else(|_| "512".to_string())
                .parse::<u32>()
                .context("HF_MAX_NEW_TOKENS must be a positive integer")?,
            job_dedup: parse_job_dedup(
                &std::env::var("JOB_DEDUP").unwrap_or_else(|_| "none".to_string()),
            )?,
        })
    }
}

/// Treats unset and blank variables the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_job_dedup(raw: &str) -> Result<JobDedup> {
    match raw.trim().to_lowercase().as_str() {
        "" | "none" | "keep_all" => Ok(JobDedup::KeepAll),
        "title" | "by_title" => Ok(JobDedup::ByTitle),
        other => bail!("JOB_DEDUP must be 'none' or 'title', got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_job_dedup_accepts_known_values() {
        assert_eq!(parse_job_dedup("none").unwrap(), JobDedup::KeepAll);
        assert_eq!(parse_job_dedup("").unwrap(), JobDedup::KeepAll);
        assert_eq!(parse_job_dedup("Title").unwrap(), JobDedup::ByTitle);
        assert_eq!(parse_job_dedup(" by_title ").unwrap(), JobDedup::ByTitle);
    }

    #[test]
    fn test_parse_job_dedup_rejects_unknown_value() {
        let err = parse_job_dedup("sometimes").unwrap_err();
        assert!(err.to_string().contains("sometimes"));
    }
}
