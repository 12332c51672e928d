use std::sync::Arc;

use dsr_core::{
    error::ServerError,
    interface::{llm::Llm, server::RelayServer},
    model::message::{AssistantReply, UserMessage},
};
use futures::{FutureExt, future::BoxFuture};
use tracing::debug;

/// 受け取った発言を 1 件ずつ LLM へ中継する。会話の状態は持たない。
#[derive(Debug, Clone)]
pub struct Relay(Arc<RelayInner>);

impl Relay {
    pub fn new(llm: Box<dyn Llm + 'static>) -> Relay {
        Relay(Arc::new(RelayInner { llm }))
    }
}

impl RelayServer for Relay {
    fn process(&self, user_message: UserMessage) -> BoxFuture<'_, Result<AssistantReply, ServerError>> {
        async move { self.0.process(user_message).await }.boxed()
    }
}

#[derive(Debug)]
struct RelayInner {
    llm: Box<dyn Llm + 'static>,
}

impl RelayInner {
    async fn process(&self, user_message: UserMessage) -> Result<AssistantReply, ServerError> {
        debug!("relaying {} character(s)", user_message.text.chars().count());
        let reply = self.llm.send_message(&user_message).await?;
        Ok(reply)
    }
}
