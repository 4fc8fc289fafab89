use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Body of `POST /api/chat` and `POST /api/chat/stream`.
/// Single-turn clients send `message`; multi-turn clients send `messages`.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub messages: Option<Vec<ChatMessage>>,
}

impl ChatRequest {
    /// The text to classify: the last user turn when `messages` is present,
    /// otherwise `message`. Blank input counts as missing.
    pub fn effective_message(&self) -> Option<&str> {
        let candidate = match &self.messages {
            Some(messages) => messages
                .iter()
                .rev()
                .find(|m| m.role == Role::User)
                .map(|m| m.content.as_str()),
            None => self.message.as_deref(),
        };
        candidate.filter(|m| !m.trim().is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ChatRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_single_turn_message() {
        assert_eq!(parse(r#"{"message":"hello"}"#).effective_message(), Some("hello"));
    }

    #[test]
    fn test_missing_or_blank_message_is_none() {
        assert_eq!(parse("{}").effective_message(), None);
        assert_eq!(parse(r#"{"message":""}"#).effective_message(), None);
        assert_eq!(parse(r#"{"message":"   "}"#).effective_message(), None);
    }

    #[test]
    fn test_multi_turn_uses_last_user_message() {
        let request = parse(
            r#"{"messages":[
                {"role":"user","content":"I like coding"},
                {"role":"assistant","content":"Great!"},
                {"role":"user","content":"I also studied finance"},
                {"role":"assistant","content":"Noted."}
            ]}"#,
        );
        assert_eq!(request.effective_message(), Some("I also studied finance"));
    }

    #[test]
    fn test_multi_turn_without_user_message_is_none() {
        let request = parse(r#"{"messages":[{"role":"assistant","content":"Hi there"}]}"#);
        assert_eq!(request.effective_message(), None);
        assert_eq!(parse(r#"{"messages":[]}"#).effective_message(), None);
    }

    #[test]
    fn test_messages_take_precedence_over_message() {
        let request = parse(
            r#"{"message":"ignored","messages":[{"role":"user","content":"used"}]}"#,
        );
        assert_eq!(request.effective_message(), Some("used"));
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = serde_json::from_str::<ChatRequest>(
            r#"{"messages":[{"role":"system","content":"x"}]}"#,
        );
        assert!(result.is_err());
    }
}
