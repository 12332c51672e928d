//! Chat Completion API の送受信形式。

use serde::{Deserialize, Serialize};

/// POST /chat/completions のリクエスト本体。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<CompletionMessage>,
    pub temperature: f64,
}

impl CompletionRequest {
    /// user role のメッセージ 1 件だけを持つリクエストを作る。
    pub fn single_user(model: impl Into<String>, content: impl Into<String>, temperature: f64) -> CompletionRequest {
        CompletionRequest {
            model: model.into(),
            messages: vec![CompletionMessage {
                role: CompletionRole::User,
                content: content.into(),
            }],
            temperature,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionMessage {
    pub role: CompletionRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionRole {
    User,
}

/// レスポンス本体のうち参照する部分のみ。
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

impl CompletionResponse {
    /// 最初の choice の本文を取り出す。
    pub fn into_first_content(self) -> Option<String> {
        self.choices.into_iter().next().map(|c| c.message.content)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoiceMessage {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_wire_format() {
        let request = CompletionRequest::single_user("deepseek-chat", "hello", 0.7);
        let body = serde_json::to_string(&request).expect("request must serialize");

        assert_eq!(
            body,
            r#"{"model":"deepseek-chat","messages":[{"role":"user","content":"hello"}],"temperature":0.7}"#
        );
    }

    #[test]
    fn empty_text_is_forwarded_as_is() {
        let request = CompletionRequest::single_user("deepseek-chat", "", 0.7);
        assert_eq!(request.messages[0].content, "");
    }

    #[test]
    fn first_choice_is_taken_verbatim() {
        let response: CompletionResponse = serde_json::from_str(
            r#"{
                "id": "abc",
                "object": "chat.completion",
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": "  first\n"}, "finish_reason": "stop"},
                    {"index": 1, "message": {"role": "assistant", "content": "second"}, "finish_reason": "stop"}
                ]
            }"#,
        )
        .expect("response must deserialize");

        assert_eq!(response.into_first_content().as_deref(), Some("  first\n"));
    }

    #[test]
    fn missing_choices_is_rejected() {
        let result = serde_json::from_str::<CompletionResponse>(r#"{"error": {"message": "nope"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_choices_has_no_content() {
        let response: CompletionResponse = serde_json::from_str(r#"{"choices": []}"#).expect("must deserialize");
        assert_eq!(response.into_first_content(), None);
    }
}
