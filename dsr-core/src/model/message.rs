/// Relay に渡されるユーザーの発言。内容は検証せずそのまま転送する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserMessage {
    pub text: String,
}

impl UserMessage {
    pub fn new(text: impl Into<String>) -> UserMessage {
        UserMessage { text: text.into() }
    }
}

/// LLM からの応答。最初の choice の内容を加工せずに保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub text: String,
}
