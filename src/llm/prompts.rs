use serde::Serialize;

/// Instruction sent as the system message for every summary.
pub const SUMMARY_INSTRUCTION: &str = "You are an executive assistant. Summarize the provided meeting transcript into clear, actionable bullet points.";

/// One chat message in a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

/// Build the fixed two-message summary prompt for a transcript.
pub fn build_summary_messages(transcript: &str) -> [ChatMessage<'_>; 2] {
    [
        ChatMessage {
            role: "system",
            content: SUMMARY_INSTRUCTION,
        },
        ChatMessage {
            role: "user",
            content: transcript,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_is_passed_as_user_content() {
        let transcript = "Alice: {text} is literal here.\n";
        let [system, user] = build_summary_messages(transcript);

        assert_eq!(system.role, "system");
        assert_eq!(system.content, SUMMARY_INSTRUCTION);
        assert_eq!(user.role, "user");
        assert_eq!(user.content, transcript);
    }
}
