use crate::impls::llm::WrappedLlmError;

use std::{sync::Arc, time::Duration};

use dsr_core::{
    APP_USER_AGENT,
    config::AppConfigLlm,
    error::LlmError,
    interface::llm::Llm,
    model::{
        completion::{CompletionRequest, CompletionResponse},
        message::{AssistantReply, UserMessage},
    },
};
use futures::{FutureExt, future::BoxFuture};
use reqwest::Client;

/// エラー応答の本文が読めなかったときに代わりに入れる文字列。
const UNREADABLE_BODY: &str = "<unreadable body>";

/// DeepSeek の Chat Completion API を利用したバックエンド。
/// 1 回の送信につき 1 回だけリクエストを発行し、再試行はしない。
#[derive(Debug, Clone)]
pub struct DeepseekBackend(Arc<DeepseekBackendInner>);

impl DeepseekBackend {
    pub fn new(config: &AppConfigLlm) -> Result<DeepseekBackend, LlmError> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(APP_USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(WrappedLlmError::from)?;

        Ok(DeepseekBackend(Arc::new(DeepseekBackendInner {
            client,
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        })))
    }
}

impl Llm for DeepseekBackend {
    fn send_message<'a>(&'a self, user_message: &'a UserMessage) -> BoxFuture<'a, Result<AssistantReply, LlmError>> {
        async move { self.0.send_message(user_message).await.map_err(LlmError::from) }.boxed()
    }
}

#[derive(Debug)]
struct DeepseekBackendInner {
    client: Client,
    endpoint: String,
    token: String,
    model: String,
    temperature: f64,
}

impl DeepseekBackendInner {
    async fn send_message(&self, user_message: &UserMessage) -> Result<AssistantReply, WrappedLlmError> {
        let request = CompletionRequest::single_user(&self.model, &user_message.text, self.temperature);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| UNREADABLE_BODY.to_string());
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let response_bytes = response.bytes().await?;
        let completion: CompletionResponse = serde_json::from_slice(&response_bytes)?;
        let Some(text) = completion.into_first_content() else {
            return Err(LlmError::NoChoice.into());
        };
        Ok(AssistantReply { text })
    }
}
